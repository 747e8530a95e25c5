use alloy_primitives::{Address, U256};
use cf_chain_client::units::format_ether;

/// `0x1234...abcd`: first six and last four characters of an address.
pub fn short_address(address: Address) -> String {
    shorten(&address.to_checksum(None), 6, 4)
}

pub fn ether_amount(wei: U256) -> String {
    format!("{} ETH", format_ether(wei))
}

fn shorten(s: &str, head: usize, tail: usize) -> String {
    if s.len() <= head + tail + 3 {
        s.to_string()
    } else {
        format!("{}...{}", &s[..head], &s[s.len() - tail..])
    }
}
