use crate::di::Resolver;
use ferrous_resolv_application::use_cases::free_addr_info;
use ferrous_resolv_domain::AddrInfoHints;

pub fn run(
    resolver: &Resolver,
    host: Option<&str>,
    service: Option<&str>,
    hints: &AddrInfoHints,
) -> anyhow::Result<()> {
    let list = match resolver.get_addr_info.execute(host, service, Some(hints)) {
        Ok(list) => list,
        Err(e) => anyhow::bail!("getaddrinfo failed: {} (code {})", e, e.code()),
    };

    for entry in list.iter() {
        match &entry.canonical_name {
            Some(name) => println!(
                "{}\t{}\t{}\t{}",
                entry.addr,
                entry.family.name(),
                entry.socket_type.as_raw(),
                name
            ),
            None => println!(
                "{}\t{}\t{}",
                entry.addr,
                entry.family.name(),
                entry.socket_type.as_raw()
            ),
        }
    }

    free_addr_info(Some(list));
    Ok(())
}
