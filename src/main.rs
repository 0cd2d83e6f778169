use anyhow::Result;
use clap::{App as ClapApp, Arg};
use fieldcheck::{app::App, config::Config, forms::FormKind, ui::Theme};

#[tokio::main]
async fn main() -> Result<()> {
    let themes = Theme::available_themes();
    let theme_names: Vec<&str> = themes.iter().map(String::as_str).collect();
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("form")
                .short("f")
                .long("form")
                .value_name("FORM")
                .help("Form to show first")
                .possible_values(&["simple", "complex"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("THEME")
                .help("Color theme for this session")
                .possible_values(&theme_names)
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(kind) = matches.value_of("form").and_then(FormKind::from_name) {
        config.start_form = kind;
    }
    if let Some(theme) = matches.value_of("theme") {
        config.theme_name = theme.to_string();
    }

    App::start(config).await
}
