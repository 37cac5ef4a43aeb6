use carbon_audit::{AuditConfig, FormController, PageSpeedClient, Strategy};
use clap::{Arg, Command};
use indicatif::{ProgressBar, ProgressStyle};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    env_logger::init();

    let matches = Command::new("Website Carbon Footprint Calculator")
        .version(env!("CARGO_PKG_VERSION"))
        .about("PageSpeed 페이지 무게로 페이지뷰당 CO2 배출량을 추정하고 저장")
        .arg(
            Arg::new("url")
                .long("url")
                .value_name("URL")
                .help("분석할 페이지 URL")
                .default_value("")
        )
        .arg(
            Arg::new("name")
                .long("name")
                .value_name("NAME")
                .help("요청자 이름")
                .default_value("")
        )
        .arg(
            Arg::new("email")
                .long("email")
                .value_name("EMAIL")
                .help("요청자 이메일")
                .default_value("")
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .short('s')
                .value_name("STRATEGY")
                .help("디바이스 프로파일")
                .value_parser(["desktop", "mobile"])
                .default_value("desktop")
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .value_name("KEY")
                .help("PageSpeed API 키 (기본: $PAGESPEED_API_KEY)")
        )
        .arg(
            Arg::new("pagespeed-endpoint")
                .long("pagespeed-endpoint")
                .value_name("URL")
                .help("PageSpeed runPagespeed 엔드포인트")
        )
        .arg(
            Arg::new("save-endpoint")
                .long("save-endpoint")
                .value_name("URL")
                .help("결과 저장 엔드포인트")
        )
        .get_matches();

    let mut config = AuditConfig::from_env();
    if let Some(key) = matches.get_one::<String>("api-key") {
        config.api_key = Some(key.clone());
    }
    if let Some(endpoint) = matches.get_one::<String>("pagespeed-endpoint") {
        config.pagespeed_endpoint = endpoint.clone();
    }
    if let Some(endpoint) = matches.get_one::<String>("save-endpoint") {
        config.save_endpoint = endpoint.clone();
    }

    let client = match PageSpeedClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ HTTP 클라이언트 생성 실패: {}", e);
            process::exit(1);
        }
    };

    let strategy = matches
        .get_one::<String>("strategy")
        .and_then(|s| s.parse::<Strategy>().ok())
        .unwrap_or_default();

    let mut controller = FormController::new(client);
    controller.set_url(field(&matches, "url"));
    controller.set_name(field(&matches, "name"));
    controller.set_email(field(&matches, "email"));
    controller.set_strategy(strategy);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Analyzing... {}", controller.state().url));

    let outcome = controller.submit().await;
    spinner.finish_and_clear();

    println!("=== Website Carbon Footprint Calculator ===");
    for line in controller.state().display_lines() {
        println!("{}", line);
    }

    if outcome.is_err() {
        process::exit(1);
    }
}

fn field(matches: &clap::ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}
