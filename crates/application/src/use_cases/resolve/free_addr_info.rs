use ferrous_resolv_domain::AddrInfo;

/// Releases an address-info list entry by entry and returns how many entries
/// were freed. Accepts an absent list.
pub fn free_addr_info(list: Option<Box<AddrInfo>>) -> usize {
    let mut released = 0;
    let mut current = list;

    while let Some(mut entry) = current {
        current = entry.next.take();
        entry.canonical_name = None;
        released += 1;
    }

    released
}
