use std::io::{self, Read, Write};

use clap::{App, Arg};
use env_logger::Env;
use log::{error, info};
use nbtag::ReadOptions;
use nbtag_tools::{decompress, dump, Compression, Result};

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    let mut data = vec![];
    match path {
        Some(path) => {
            std::fs::File::open(path)?.read_to_end(&mut data)?;
        }
        None => {
            io::stdin().read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

fn run() -> Result<()> {
    let matches = App::new("nbt-dump")
        .about("Print the contents of an NBT file")
        .arg(
            Arg::with_name("file")
                .help("NBT file to read, stdin if absent")
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("compression")
                .long("compression")
                .takes_value(true)
                .possible_values(&["auto", "gzip", "zlib", "none"])
                .default_value("auto"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print the values as JSON, dropping NBT types"),
        )
        .arg(
            Arg::with_name("anonymous-root")
                .long("anonymous-root")
                .help("the root tag has no name"),
        )
        .get_matches();

    let compression: Compression = matches.value_of("compression").unwrap_or("auto").parse()?;
    let opts = ReadOptions::new().anonymous_root(matches.is_present("anonymous-root"));

    let data = read_input(matches.value_of("file"))?;
    info!("read {} bytes", data.len());

    let data = decompress(data, compression)?;
    let tag = nbtag::from_bytes_with_opts(&data, opts)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if matches.is_present("json") {
        serde_json::to_writer_pretty(&mut out, &tag)?;
        writeln!(out)?;
    } else {
        dump(&mut out, &tag)?;
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
