extern crate arpgen;
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

use std::process;

use clap::{
    App,
    Arg,
    ArgMatches,
    ErrorKind,
};

use arpgen::core::config::{
    keys,
    Config,
};
use arpgen::core::packet::ArpFrame;
use arpgen::Result;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

const USAGE_HINT: &str = "Use --help or -h for help";

const EXAMPLE: &str = "EXAMPLE:\n    # arpgen \\\n        \
                       --interface=eth0 \\\n        \
                       --mac-src=\"02:A1:A2:A3:A4:A5\" \\\n        \
                       --mac-dst=\"FF:FF:FF:FF:FF:FF\" \\\n        \
                       --operation=1 \\\n        \
                       --arp-sha=\"02:A1:A2:A3:A4:A5\" \\\n        \
                       --arp-spa=\"192.168.2.1\" \\\n        \
                       --arp-tha=\"00:00:00:00:00:00\" \\\n        \
                       --arp-tpa=\"192.168.2.224\"";

lazy_static! {
    static ref DEFAULTS: Config = Config::default();

    /// (key, value name, help) of every overridable field.
    static ref FIELDS: Vec<(&'static str, &'static str, String)> = vec![
        (keys::MAC_SRC, "MAC", format!("Source MAC address [default: {}]", DEFAULTS.mac_src)),
        (
            keys::MAC_DST,
            "MAC",
            format!("Destination MAC address [default: {}]", DEFAULTS.mac_dst),
        ),
        (
            keys::OPERATION,
            "NUM",
            format!(
                "ARP operation, 1 for request and 2 for reply [default: {}]",
                DEFAULTS.operation.0
            ),
        ),
        (
            keys::ARP_SHA,
            "MAC",
            format!("ARP sender hardware address [default: {}]", DEFAULTS.arp_sha),
        ),
        (
            keys::ARP_SPA,
            "IP",
            format!("ARP sender protocol address [default: {}]", DEFAULTS.arp_spa),
        ),
        (
            keys::ARP_THA,
            "MAC",
            format!("ARP target hardware address [default: {}]", DEFAULTS.arp_tha),
        ),
        (
            keys::ARP_TPA,
            "IP",
            format!("ARP target protocol address [default: {}]", DEFAULTS.arp_tpa),
        ),
    ];

    static ref HELP_INTERFACE: String =
        format!("Interface to send the frame out of [default: {}]", DEFAULTS.interface);

    static ref LICENSE: String = format!(
        "The MIT License (MIT)\n\
         \n\
         Copyright (c) {}\n\
         \n\
         Permission is hereby granted, free of charge, to any person obtaining a\n\
         copy of this software and associated documentation files (the \"Software\"),\n\
         Software is furnished to do so, subject to the following conditions:\n\
         \n\
         The above copyright notice and this permission notice shall be included\n\
         in all copies or substantial portions of the Software.\n\
         \n\
         THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS\n\
         OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF\n\
         MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.\n\
         IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY\n\
         CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT\n\
         OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR\n\
         THE USE OR OTHER DEALINGS IN THE SOFTWARE.",
        AUTHORS
    );
}

fn app<'a, 'b>() -> App<'a, 'b> {
    let app = App::new("arpgen")
        .version(VERSION)
        .version_short("v")
        .author(AUTHORS)
        .about("ARP packet generator for IPv4")
        .after_help(EXAMPLE)
        .arg(
            Arg::with_name("authors")
                .short("a")
                .long("authors")
                .help("Show authors and exit"),
        )
        .arg(
            Arg::with_name("license")
                .short("l")
                .long("license")
                .help("Show license and exit"),
        )
        .arg(
            Arg::with_name("dump")
                .long("dump")
                .help("Print the frame as a hex dump before sending"),
        )
        .arg(
            Arg::with_name("dry-run")
                .short("n")
                .long("dry-run")
                .help("Print the frame as a hex dump without sending"),
        )
        .arg(
            Arg::with_name(keys::INTERFACE)
                .short("i")
                .long(keys::INTERFACE)
                .value_name("IFACE")
                .help(HELP_INTERFACE.as_str())
                .takes_value(true),
        );

    FIELDS.iter().fold(app, |app, &(key, value_name, ref help)| {
        app.arg(
            Arg::with_name(key)
                .long(key)
                .value_name(value_name)
                .help(help.as_str())
                .takes_value(true),
        )
    })
}

/// Applies the overrides given on the command line to the defaults.
fn configure(matches: &ArgMatches) -> Result<Config> {
    Config::from_pairs(
        keys::ALL
            .iter()
            .filter_map(|key| matches.value_of(key).map(|value| (*key, value))),
    )
}

#[cfg(target_os = "linux")]
fn transmit(config: &Config) -> Result<()> {
    use arpgen::core::link::send_frame;
    use arpgen::linux::RawSocket;

    let mut socket = RawSocket::bind(&config.interface)?;
    send_frame(&mut socket, &config.frame())?;
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn transmit(_: &Config) -> Result<()> {
    use arpgen::core::link::Error as LinkError;

    Err(LinkError::Unknown("raw sockets are only supported on Linux").into())
}

/// Formats a buffer as rows of 16 hexadecimal octets prefixed by their offset.
fn hex_dump(buffer: &[u8]) -> String {
    let mut dump = String::new();

    for (i, row) in buffer.chunks(16).enumerate() {
        let octets: Vec<_> = row.iter().map(|byte| format!("{:02x}", byte)).collect();
        dump.push_str(&format!("{:04x}  {}\n", i * 16, octets.join(" ")));
    }

    dump
}

fn banner() {
    println!("arpgen {}", VERSION);
    println!("ARP packet generator for IPv4");
}

fn main() {
    env_logger::init();

    let matches = match app().get_matches_safe() {
        Ok(matches) => matches,
        Err(err) => match err.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => err.exit(),
            _ => {
                eprintln!("{}", err.message);
                eprintln!("{}", USAGE_HINT);
                process::exit(2);
            }
        },
    };

    if matches.is_present("authors") {
        banner();
        println!("Author: {}", AUTHORS);
        return;
    }

    if matches.is_present("license") {
        banner();
        println!();
        println!("{}", *LICENSE);
        return;
    }

    let config = match configure(&matches) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", USAGE_HINT);
            process::exit(2);
        }
    };

    info!("{}", config);

    let dry_run = matches.is_present("dry-run");

    if dry_run || matches.is_present("dump") {
        let buffer: [u8; ArpFrame::LEN] = config.frame().serialize();
        print!("{}", hex_dump(&buffer[..]));
    }

    if dry_run {
        return;
    }

    if let Err(err) = transmit(&config) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
