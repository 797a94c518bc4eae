mod opts;

use crate::opts::Opts;
use codemap::CodeMap;
use gumdrop::Options;
use rcdgen::diagnostic::Error;
use std::{fs, io::Read, process};

fn main() {
    let opts = Opts::parse_args_default_or_exit();
    if opts.files.len() > 1 {
        eprintln!(
            "error: expected at most one source file, got {}",
            opts.files.len(),
        );
        process::exit(1);
    }

    let mut code_map = CodeMap::new();
    let (name, source) = match opts.files.first() {
        Some(path) => (path.display().to_string(), fs::read_to_string(path)),
        None => ("<stdin>".to_owned(), {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map(|_| source)
        }),
    };
    let source = match source {
        Ok(source) => source,
        Err(inner) => {
            Error::FailedToReadSourceCode { inner }.emit(&code_map);
            process::exit(1);
        }
    };
    let file = code_map.add_file(name, source);

    if let Err(err) = rcdgen::compile(&code_map, &file) {
        err.emit(&code_map);
        process::exit(1);
    }
}
