use std::time::Duration;

use schemaconf::{parse_file, BlockSpec, PropertySpec, Section, Spec, ValueType};

fn spec() -> Spec {
    Spec::new()
        .strict()
        .property(PropertySpec::new("name", ValueType::String).require())
        .property(PropertySpec::new("debug", ValueType::Bool))
        .property(PropertySpec::new("heartbeat-ttl", ValueType::Duration))
        .block(
            BlockSpec::new("*")
                .repeat()
                .property(PropertySpec::new("dev", ValueType::String).require())
                .property(PropertySpec::new("tags", ValueType::StringList)),
        )
}

fn main() -> Result<(), schemaconf::Error> {
    let config = parse_file(&spec(), "demos/demo.conf")?;

    println!(
        "App: {} (debug={})",
        config.get::<String>("name")?,
        config.get_or("debug", false)?
    );
    println!(
        "Heartbeat: {:?}",
        config.get_or("heartbeat-ttl", Duration::from_secs(5))?
    );
    for disk in &config.blocks {
        let tags = disk.get_or::<Vec<String>>("tags", Vec::new())?;
        println!("Disk {}: {} {:?}", disk.name, disk.get::<String>("dev")?, tags);
    }

    Ok(())
}
