use log::*;

use std::convert::TryInto;
use std::thread;

use actix_cors::Cors;
use actix_rt::System;
use actix_web::{middleware, web, App, HttpServer};

use crate::{app::*, error::*, services::config_services};

const DEFAULT_JSON_LIMIT: i64 = 4 * 1024 * 1024;

pub fn execute(config: AppConfig) -> Result<()> {
  let servers = config.get_array("servers")?.expect("Missing list of servers");

  let mut handles = Vec::new();
  for server in servers.iter() {
    let server = server.clone().into_str()?;
    let cfg = config.clone();
    debug!("Spawn server: {}", server);
    handles.push(thread::spawn(move || {
      if let Err(err) = run_server(&cfg, &server) {
        error!("Error from server({}): {:?}", server, err);
      }
      debug!("run_server: stopped.");
    }));
  }

  for handle in handles {
    if handle.join().is_err() {
      error!("server thread panicked");
    }
  }

  info!("main thread: stopped.");
  Ok(())
}

fn run_server(config: &AppConfig, prefix: &str) -> Result<()> {
  let mut sys = System::new(format!("system.{}", prefix));

  // configure services
  info!("Serve.Services: configure services. prefix={}", prefix);
  let services = config_services(&config, prefix)?;

  // featured images arrive as data urls, so json bodies can be large
  let json_limit = config
    .get_int(&format!("{}.json_limit", prefix))?
    .unwrap_or(DEFAULT_JSON_LIMIT) as usize;

  // Start http server
  let mut server = HttpServer::new(move || {
    let json = web::JsonConfig::default()
      .limit(json_limit)
      .error_handler(|err, _req| Error::BadRequest(err.to_string()).into());

    App::new()
      .app_data(json)
      .wrap(middleware::Compress::default())
      .wrap(Cors::permissive())
      .configure(|web| services.web_config(web))
  });

  // workers
  if let Some(workers) = config.get_int(&format!("{}.workers", prefix))? {
    info!("Workers: {}", workers);
    server = server.workers(workers.try_into().expect("Workers must be > 0"));
  }

  // listen backlog
  if let Some(backlog) = config.get_int(&format!("{}.backlog", prefix))? {
    info!("Listen backlog: {}", backlog);
    server = server.backlog(backlog as i32);
  }

  // setup binds.
  let listen = config
    .get_str(&format!("{}.listen", prefix))?
    .expect(&format!("Missing {}.listen", prefix));
  info!("{} services listening on: {}", prefix, listen);
  server = server.bind(listen)?;

  // run server future
  Ok(sys.block_on(server.run())?)
}
