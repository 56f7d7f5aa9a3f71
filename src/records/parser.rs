use super::DnsRecord;

/// Parse a DreamHost `dns-list_records` response body into records.
///
/// The listing is plaintext, one record per line, fields separated by runs
/// of tabs and spaces. Only lines containing `domain_filter` are kept; this
/// is a coarse substring pre-filter inherited from the provider's own
/// conventions, and exact matching happens later in [`super::select`].
///
/// Parsing is total: header lines, status lines, and lines with fewer than
/// five fields are silently skipped, never an error. An empty body yields
/// an empty set.
pub fn parse(body: &str, domain_filter: &str) -> Vec<DnsRecord> {
    body.lines()
        .filter(|line| line.contains(domain_filter))
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<DnsRecord> {
    // split_whitespace collapses runs of tabs and spaces, so mixed
    // delimiters from the provider all behave the same.
    let mut fields = line.split_whitespace();

    let account_id = fields.next()?;
    let zone = fields.next()?;
    let record = fields.next()?;
    let record_type = fields.next()?;
    let value = fields.next()?;
    // Comment and editable flag are best-effort; older listings omit them.
    let comment = fields.next().unwrap_or_default();
    let editable = fields.next().unwrap_or_default();

    Some(DnsRecord {
        account_id: account_id.to_string(),
        zone: zone.to_string(),
        record: record.to_string(),
        record_type: record_type.to_string(),
        value: value.to_string(),
        comment: comment.to_string(),
        editable: editable.to_string(),
    })
}
