use ferrous_resolv_application::use_cases::gai_strerror;

pub fn run(code: i32) -> anyhow::Result<()> {
    println!("{}", gai_strerror(code));
    Ok(())
}
