use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("scriptura")
        .version("1.0.0")
        .about("Convert Bible HTML books into a single XML document")
        .arg(clap::arg!(<INPUT> "HTML book or directory of HTML books"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file, or '-' for stdout (default: bible.xml / bible.json)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (xml, json)")
                .value_name("FORMAT")
                .default_value("xml")
                .value_parser(["xml", "json"]),
        )
        .arg(clap::arg!(--keyword <WORD> "Chapter heading keyword").default_value("capítulo"))
        .arg(clap::arg!(--compact "Write output without indentation"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "scriptura", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "scriptura", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "scriptura", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "scriptura", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
