//! Binary entrypoint: drive a dashboard session over JSON lines.
//!
//! The seeded dashboard's initial view is printed first; afterwards each
//! stdin line is one Action and produces one rendered ViewModel line.
//! Malformed lines produce an ErrorOutput line and the session continues.
//! Blank lines are skipped.

use std::io::{self, BufRead, Write};

use incident_dashboard::{
  render, Action, Config, Dashboard, ErrorOutput, SessionError, SystemEnv,
};

fn main() {
  if let Err(e) = run() {
    eprintln!("incident-dashboard: {}", e);
    std::process::exit(1);
  }
}

fn run() -> Result<(), SessionError> {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  let mut env = SystemEnv;
  let mut dashboard = Dashboard::seeded(Config::default());

  write_view(&mut out, &dashboard)?;

  for line in stdin.lock().lines() {
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let action: Action = match serde_json::from_str(trimmed) {
      Ok(action) => action,
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        serde_json::to_writer(&mut out, &err)?;
        writeln!(out)?;
        continue;
      }
    };

    dashboard.apply(action, &mut env);
    write_view(&mut out, &dashboard)?;
  }

  out.flush()?;
  Ok(())
}

fn write_view<W: Write>(out: &mut W, dashboard: &Dashboard) -> Result<(), SessionError> {
  serde_json::to_writer(&mut *out, &render(dashboard))?;
  writeln!(out)?;
  Ok(())
}
