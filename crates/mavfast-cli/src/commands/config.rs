use crate::OutputFormat;
use anyhow::Result;
use mavfast_api::Config;
use mavfast_api::config::RedactedConfig;

pub fn execute(config: &Config, format: OutputFormat) -> Result<()> {
    let redacted = config.redacted();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&redacted)?),
        OutputFormat::Pretty => output_pretty(&redacted),
    }

    Ok(())
}

fn output_pretty(config: &RedactedConfig) {
    use console::style;

    fn show(value: &Option<String>) -> String {
        value.clone().unwrap_or_else(|| "(unset)".to_string())
    }

    fn set(flag: bool) -> &'static str {
        if flag { "set" } else { "(unset)" }
    }

    println!("\n{}", style("MavFast Configuration").bold().cyan());
    println!("{}", style("=====================").cyan());
    println!("  Listen:             {}", config.bind_addr);
    println!("  Debug:              {}", config.debug);
    println!("  Log File:           {}", show(&config.log_file));
    println!("  Supplier URL:       {}", config.supplier_url);
    println!("  Company ID:         {}", show(&config.company_id));
    println!("  User ID:            {}", show(&config.user_id));
    println!("  Password:           {}", set(config.password_set));
    println!("  Chrome Binary:      {}", show(&config.chrome_bin));
    println!("  Sheets Credentials: {}", set(config.sheets_credentials_set));
    println!("  Input Sheet:        {}", show(&config.input_sheet_id));
    println!("  Output Sheet:       {}", show(&config.output_sheet_id));
    println!();
}
