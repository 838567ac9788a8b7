use crate::di::Resolver;
use ferrous_resolv_domain::HostEntrySlot;

pub fn run(resolver: &Resolver, name: &str) -> anyhow::Result<()> {
    let mut slot = HostEntrySlot::new();

    let entry = match resolver.get_host_by_name.execute(name, &mut slot) {
        Ok(entry) => entry,
        Err(e) => anyhow::bail!("gethostbyname failed: {} (h_errno {})", e, e.h_errno()),
    };

    println!("name:    {}", entry.name);
    println!("type:    {}", entry.addr_type.name());
    println!("length:  {}", entry.length);
    for addr in &entry.addr_list {
        println!("address: {}", addr);
    }

    Ok(())
}
