use env_logger::Env;
use yowatch_fontgen::FontGenConfig;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match yowatch_fontgen::generate_fonts(&FontGenConfig::default()) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error encountered: {:?}", e);
            std::process::exit(1);
        }
    }
}
