use super::{AddressFamily, DnsRecord};

/// Find the published address record for `domain` in the given family.
///
/// Unlike the parser's substring pre-filter, matching here is exact on both
/// the record name and the record type: a domain can carry co-located
/// subdomain or CNAME lines and only the exact (domain, type) pair is "the"
/// address record. The first match in listing order wins; DreamHost keeps
/// (domain, type) pairs unique, so later duplicates are not resolved
/// further.
///
/// `None` is a normal outcome, meaning the record has not been created yet.
pub fn select<'a>(
    records: &'a [DnsRecord],
    domain: &str,
    family: AddressFamily,
) -> Option<&'a DnsRecord> {
    records
        .iter()
        .find(|rec| rec.record == domain && rec.record_type == family.record_type())
}
