use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

const LOG_CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_APPENDER_NAME: &str = "stderr";
const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(LOG_CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    if let Some(config) = fallback_config() {
        // a logger may already be installed by the embedding process
        let _ = log4rs::init_config(config);
    }
}

fn fallback_config() -> Option<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER_NAME, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER_NAME)
                .build(LevelFilter::Warn),
        )
        .ok()
}
