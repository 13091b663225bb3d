use dotenv::dotenv;

use urban_telegraph::{app::*, error::*};

fn main() -> Result<()> {
  dotenv().ok();
  env_logger::init();

  let cli = clap::App::new("urban-telegraph")
    .about("Urban-Telegraph content API")
    .arg(
      clap::Arg::new("config")
        .short('c')
        .long("config")
        .takes_value(true)
        .help("Use a specific config file"),
    )
    .subcommand(clap::App::new("serve").about("Run the HTTP servers"))
    .get_matches();

  let config = AppConfig::new_clap(&cli)?;

  match cli.subcommand_name() {
    // default to 'serve' command.
    _ => serve::execute(config)?,
  }
  log::info!("Main finished");
  Ok(())
}
