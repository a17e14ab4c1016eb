extern crate si_desc as desc;

mod error;

use std::fs;
use std::process;

use clap::{App, Arg};
use log::{error, info};
use url::Url;

use desc::{Descriptors, LogSink, Registry};
use crate::error::{Error, Kind as ErrorKind, Result};

struct Opts {
    input: Url,
    offset: usize,
    length: Option<usize>,
    indent: usize,
}

fn opts() -> Result<Opts> {
    let matches = App::new("SI descriptor dump")
        .version("0.0.1")
        .author("Ivan Egorov <vany.egorov@gmail.com>")
        .about("Decodes a raw DVB/MPEG-2 descriptor loop")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .help("Sets the input file URL, e.g. file:///tmp/loop.bin")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("offset")
                .short("o")
                .long("offset")
                .help("Offset of the first tag byte inside the input")
                .default_value("0")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("length")
                .short("l")
                .long("length")
                .help("Descriptor loop length, defaults to the rest of the input")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("indent")
                .long("indent")
                .help("Spaces prepended to every descriptor line")
                .default_value("2")
                .takes_value(true),
        )
        .get_matches();

    // required/default_value guarantee presence
    let input = Url::parse(matches.value_of("input").unwrap_or_default())?;
    let offset = matches.value_of("offset").unwrap_or("0").parse()?;
    let length = match matches.value_of("length") {
        Some(v) => Some(v.parse()?),
        None => None,
    };
    let indent = matches.value_of("indent").unwrap_or("2").parse()?;

    Ok(Opts {
        input,
        offset,
        length,
        indent,
    })
}

fn read(opts: &Opts) -> Result<Vec<u8>> {
    if opts.input.scheme() != "file" {
        return Err(Error::new_with_details(
            ErrorKind::InputUrlSchemeUnsupported,
            opts.input.scheme().to_string(),
        ));
    }

    let path = opts
        .input
        .to_file_path()
        .map_err(|_| Error::new(ErrorKind::InputUrlBadPath))?;

    let mut buf = fs::read(path)?;

    let lft = opts.offset.min(buf.len());
    let rght = match opts.length {
        Some(length) => (lft + length).min(buf.len()),
        None => buf.len(),
    };

    buf.truncate(rght);
    Ok(buf.split_off(lft))
}

fn run(opts: &Opts) -> Result<()> {
    let buf = read(opts)?;
    let registry = Registry::default();
    let mut sink = LogSink::new(opts.indent);

    info!("<<< {} ({} bytes, {:?})", opts.input, buf.len(), registry);

    // decode everything first
    let entries: Vec<_> = Descriptors::new(&buf, &registry).collect();

    let mut first_err = None;
    for resl in entries {
        let entry = match resl {
            Ok(entry) => entry,
            Err(err) => {
                error!("decode: {}", err);
                first_err.get_or_insert(err);
                continue;
            }
        };

        entry.log(&mut sink);

        if let Err(err) = entry.validate() {
            error!("validate {:?}: {}", entry.tag(), err);
            first_err.get_or_insert(err);
        }
    }

    match first_err {
        Some(err) => Err(Error::from(err)),
        None => Ok(()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = match opts() {
        Ok(v) => v,
        Err(err) => {
            eprintln!("error parse arguments: {:?}\n", err);
            process::exit(1);
        }
    };

    if let Err(err) = run(&opts) {
        eprintln!("error dump {}: {:?}\n", opts.input, err);
        process::exit(1);
    }
}
