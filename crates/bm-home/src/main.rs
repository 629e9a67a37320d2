use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use bm_home::inspect::{Metrics, describe_controls, describe_scene};
use bm_home::{Command, Host, HostConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = HostConfig::from_env().context("reading host configuration")?;
    log::info!(
        "starting: window {}x{}, animations {}",
        config.window.0,
        config.window.1,
        if config.animations { "on" } else { "off" }
    );
    let mut host = Host::new(config)?;
    let bar = host.status_bar();
    log::debug!("status bar {:?} on {}", bar.style, bar.background.to_hex());

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let cmd: Command = match line.parse() {
            Ok(cmd) => cmd,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };
        if cmd == Command::Quit {
            break;
        }
        run(&mut host, cmd, &mut out)?;
        out.flush()?;
    }

    host.unmount();
    Ok(())
}

fn run(host: &mut Host, cmd: Command, out: &mut impl Write) -> Result<()> {
    match cmd {
        Command::Tap(label) => report_tap(out, &label, host.tap_label(&label)?)?,
        Command::Counter => report_tap(out, "counter", host.tap_counter()?)?,
        Command::Refresh => report_tap(out, "refresh", host.tap_refresh()?)?,
        Command::Wait(d) => {
            host.advance(d)?;
            writeln!(out, "waited {}ms", d.as_millis())?;
        }
        Command::Scroll(dy) => {
            let leftover = host.scroll(dy)?;
            writeln!(out, "scrolled {:.0}", dy - leftover)?;
        }
        Command::Dump => write!(out, "{}", host.view().outline())?,
        Command::Scene => {
            let m = Metrics::of(host.frame());
            writeln!(
                out,
                "{} nodes, {} text runs, {} hit regions",
                m.scene_nodes, m.text_runs, m.hit_regions
            )?;
            write!(out, "{}", describe_scene(&host.frame().scene))?;
        }
        Command::Controls => write!(out, "{}", describe_controls(host.frame()))?,
        Command::Alerts => {
            let alerts = host.alerts().snapshot();
            if alerts.is_empty() {
                writeln!(out, "no alerts")?;
            }
            for a in alerts {
                writeln!(out, "{} | {}", a.title, a.message)?;
            }
        }
        Command::Confirm => match host.confirm_alert()? {
            Some(a) => writeln!(out, "dismissed {}", a.title)?,
            None => writeln!(out, "no alert on screen")?,
        },
        Command::State => match host.snapshot() {
            Some(s) => writeln!(out, "counter={} loading={}", s.counter, s.is_loading)?,
            None => writeln!(out, "unmounted")?,
        },
        Command::Quit => {}
    }
    Ok(())
}

fn report_tap(out: &mut impl Write, what: &str, hit: bool) -> io::Result<()> {
    if hit {
        writeln!(out, "tapped {what}")
    } else {
        writeln!(out, "{what} did not receive the tap")
    }
}
