// SPDX-License-Identifier: MPL-2.0
use iced_bell::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedBell - desktop notification center

USAGE:
  iced_bell [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, ko)
  --config-dir <DIR>     Directory holding settings.toml
  --server <URL>         Notification server base URL
  --session <COOKIE>     Session cookie header value (e.g. SESSION=abc)
  -h, --help             Print this help

ENVIRONMENT:
  ICED_BELL_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG               Log filter (default: iced_bell=info)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_bell=info")),
        )
        .init();

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        server: opt_value(&mut args, "--server"),
        session: opt_value(&mut args, "--session"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "ignoring invalid argument");
            None
        }
    }
}
