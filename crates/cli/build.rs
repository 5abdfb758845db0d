use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("firmscrape")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scrape company profiles from marketing sites")
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: company_data.xlsx or company_data.json)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (xlsx, excel, json)")
                .value_name("FORMAT")
                .default_value("xlsx")
                .value_parser(["xlsx", "excel", "json"]),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(
            clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests")
                .long("user-agent")
                .value_name("UA"),
        )
        .arg(
            clap::arg!(--config_dir <DIR> "Directory of site descriptor files overriding the built-in table")
                .long("config-dir")
                .value_name("DIR")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(--news_suffix <PATH> "Path appended to each home page to reach its news listing")
                .long("news-suffix")
                .value_name("PATH")
                .default_value("/blog"),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "firmscrape", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "firmscrape", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "firmscrape", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "firmscrape", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
