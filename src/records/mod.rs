mod parser;
mod record;
mod selector;

pub use parser::parse;
pub use record::{AddressFamily, DnsRecord};
pub use selector::select;
