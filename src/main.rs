// SPDX-License-Identifier: MPL-2.0
use simple_toast::app::{self, paths, Flags};
use simple_toast::telemetry;

const HELP: &str = "\
Simple Toast - show a transient banner at the top of the window

USAGE:
  simple_toast [OPTIONS]

OPTIONS:
  --config-dir <PATH>   Directory holding settings.toml
  --no-animation        Start with the \"Animated\" switch off
  --message <TEXT>      Prefill the toast text
  --log-filter <FILTER> Tracing filter (overrides RUST_LOG)
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let log_filter: Option<String> = args.opt_value_from_str("--log-filter").unwrap_or_else(|err| {
        eprintln!("invalid --log-filter: {err}");
        None
    });
    if let Err(err) = telemetry::init_tracing(log_filter.as_deref()) {
        eprintln!("{err}");
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        }),
        no_animation: args.contains("--no-animation"),
        message: args.opt_value_from_str("--message").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --message");
            None
        }),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    tracing::info!(animated = !flags.no_animation, "starting simple toast demo");

    app::run(flags)
}
