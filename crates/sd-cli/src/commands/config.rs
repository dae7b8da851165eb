use sd_core::WheelConfig;

pub fn run(config: &WheelConfig) -> Result<(), String> {
    println!("{}", config.to_json());
    Ok(())
}
