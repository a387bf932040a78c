// SPDX-License-Identifier: MPL-2.0
use polymorphl::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
polymorphl - bilingual portfolio and blog

USAGE:
  polymorphl [OPTIONS] [PATH]

ARGS:
  [PATH]                  Page to open, e.g. / or /en/blog/hello-world

OPTIONS:
  --lang <CODE>           Interface language (fr, en)
  --theme <MODE>          Color theme (light, dark)
  --config-dir <DIR>      Directory holding settings.toml
  --content-dir <DIR>     Directory holding blog posts (*.fr.mdx, *.en.mdx)
  -h, --help              Print this help
";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("polymorphl=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let mut option = |key: &'static str| -> Option<String> {
        args.opt_value_from_str(key).unwrap_or_else(|error| {
            tracing::warn!(%key, %error, "ignoring invalid option");
            None
        })
    };
    let lang = option("--lang");
    let theme = option("--theme");
    let config_dir = option("--config-dir");
    let content_dir = option("--content-dir");

    let path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(config_dir, content_dir);

    app::run(Flags { lang, theme, path })
}
