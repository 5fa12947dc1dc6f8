use std::env;
use std::error::Error;
use std::path::Path;
use std::process;
use std::time::Instant;

use pos2mallet::util::path_helpers;
use pos2mallet::vocab::WordFrequencies;
use pos2mallet::{atis, features, mallet, wsj};

fn usage() -> ! {
  println!("usage: pos2mallet atis|wsj <input.pos> [<output.pos>] [features]");
  println!("       pos2mallet wsj-dir <root> [<output.pos>] [features]");
  println!("       pos2mallet scan <root> [<extension>]");
  process::exit(1);
}

/// Convert a POS-tagged corpus file (or a WSJ directory tree) to the Mallet
/// training format, or scan a directory for corpus files
pub fn main() -> Result<(), Box<dyn Error>> {
  let start = Instant::now();
  // Read input arguments
  let mut input_args = env::args();
  let _ = input_args.next(); // skip process name
  let mode = match input_args.next() {
    Some(mode) => mode,
    None => usage(),
  };

  if mode == "scan" {
    let root = match input_args.next() {
      Some(path) => path,
      None => usage(),
    };
    let extension = match input_args.next() {
      Some(extension) => extension,
      None => ".pos".to_string(),
    };
    for path in path_helpers::scan_corpus(Path::new(&root), &extension) {
      println!("{}", path.display());
    }
    return Ok(());
  }

  let input = match input_args.next() {
    Some(path) => path,
    None => usage(),
  };
  let out = match input_args.next() {
    Some(path) => path,
    None => "mallet.pos".to_string(),
  };
  let tag_features = match input_args.next() {
    Some(value) => match value.as_str() {
      "features" => true, // should eventually become a --features flag, rushing for now.
      _ => false,
    },
    None => false,
  };

  let corpus = match mode.as_str() {
    "atis" => atis::read_corpus(&input)?,
    "wsj" => wsj::read_corpus(&input)?,
    "wsj-dir" => wsj::read_corpus_dir(&input, None)?,
    _ => usage(),
  };
  let corpus = if tag_features {
    println!("-- will append orthographic features.");
    features::apply(&corpus, &features::standard())
  } else {
    corpus
  };
  mallet::write_file(&corpus, &out)?;

  let frequencies = WordFrequencies::from_corpus(&corpus);
  let duration_sec = start.elapsed().as_secs();
  println!("---");
  println!("Conversion finished in {:?}s, gathered: ", duration_sec);
  println!("{:?} sentences;", corpus.len());
  println!("{:?} tokens;", corpus.token_count());
  println!("{:?} distinct words;", frequencies.count());
  println!("wrote {}", out);
  Ok(())
}
