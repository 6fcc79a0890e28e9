pub fn run() -> Result<(), String> {
    println!("{}", sprlk_core::rules_guide());
    Ok(())
}
