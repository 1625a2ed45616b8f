//! Print MurmurHash3 digests of files, stdin, or a literal string.
//!
//! Usage:
//!   murmur3sum data.bin logs/*.txt
//!   cat data.bin | murmur3sum --bits 32 --seed 0x9747b28c
//!   murmur3sum --string "Hello, World!" --utf16 --bits 32 --decimal

use std::{
  env,
  fs::File,
  io::{self, Read},
  process::ExitCode,
};

use rsmurmur::{Digest32, Digest64, Digest128, StreamingHash, UInt128, io::HashReader};

/// Digest width selected with `--bits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bits {
  B32,
  B64,
  B128,
}

impl Bits {
  fn parse(value: &str) -> Option<Self> {
    match value {
      "32" => Some(Self::B32),
      "64" => Some(Self::B64),
      "128" => Some(Self::B128),
      _ => None,
    }
  }

  const fn width(self) -> u32 {
    match self {
      Self::B32 => 32,
      Self::B64 => 64,
      Self::B128 => 128,
    }
  }
}

/// CLI arguments.
#[derive(Debug)]
struct Args {
  /// Digest width.
  bits: Bits,

  /// Seed (lane `h1` for 128-bit).
  seed: u64,

  /// Seed for lane `h2`; defaults to `seed`.
  seed2: Option<u64>,

  /// Print digests in decimal instead of hex.
  decimal: bool,

  /// Hash this text instead of files.
  string: Option<String>,

  /// Encode `string` as UTF-16LE before hashing.
  utf16: bool,

  /// Report settings and byte counts on stderr.
  verbose: bool,

  /// Show help.
  help: bool,

  /// Files to hash; `-` is stdin.
  paths: Vec<String>,
}

impl Default for Args {
  fn default() -> Self {
    Self {
      bits: Bits::B128,
      seed: 0,
      seed2: None,
      decimal: false,
      string: None,
      utf16: false,
      verbose: false,
      help: false,
      paths: Vec::new(),
    }
  }
}

/// Parse a seed given in decimal or `0x`-prefixed hex.
fn parse_seed(value: &str) -> Result<u64, String> {
  let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
    Some(hex) => u64::from_str_radix(hex, 16),
    None => value.parse(),
  };
  parsed.map_err(|_| format!("Invalid seed: {value}"))
}

fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Args, String> {
  let mut args = Args::default();
  let mut iter = argv.into_iter();

  while let Some(arg) = iter.next() {
    match arg.as_str() {
      "--" => {
        args.paths.extend(iter.by_ref());
        break;
      }
      "--decimal" | "-d" => args.decimal = true,
      "--utf16" => args.utf16 = true,
      "--verbose" | "-v" => args.verbose = true,
      "--help" | "-h" => args.help = true,
      "--bits" | "-b" => {
        let Some(value) = iter.next() else {
          return Err("--bits requires a value".to_string());
        };
        args.bits = Bits::parse(&value).ok_or_else(|| format!("Unsupported width: {value} (expected 32, 64 or 128)"))?;
      }
      "--seed" | "-s" => {
        let Some(value) = iter.next() else {
          return Err("--seed requires a value".to_string());
        };
        args.seed = parse_seed(&value)?;
      }
      "--seed2" => {
        let Some(value) = iter.next() else {
          return Err("--seed2 requires a value".to_string());
        };
        args.seed2 = Some(parse_seed(&value)?);
      }
      "--string" => {
        let Some(value) = iter.next() else {
          return Err("--string requires a value".to_string());
        };
        args.string = Some(value);
      }
      "-" => args.paths.push(arg),
      other if other.starts_with('-') => {
        return Err(format!("Unknown argument: {other}"));
      }
      _ => args.paths.push(arg),
    }
  }

  if args.bits == Bits::B32 && u32::try_from(args.seed).is_err() {
    return Err(format!("Seed {} does not fit in 32 bits", args.seed));
  }
  if args.seed2.is_some() && args.bits != Bits::B128 {
    return Err("--seed2 only applies to --bits 128".to_string());
  }
  if args.utf16 && args.string.is_none() {
    return Err("--utf16 requires --string".to_string());
  }
  if args.string.is_some() && !args.paths.is_empty() {
    return Err("--string cannot be combined with file arguments".to_string());
  }

  Ok(args)
}

fn print_help() {
  eprintln!(
    "\
murmur3sum: print MurmurHash3 digests (NOT CRYPTO)

USAGE:
    murmur3sum [OPTIONS] [FILE]...

    With no FILE, or when FILE is -, read standard input.

OPTIONS:
    -b, --bits N          Digest width: 32, 64 or 128 (default: 128)
    -s, --seed N          Seed, decimal or 0x-prefixed hex (default: 0)
    --seed2 N             Seed for the second 128-bit lane (default: --seed)
    -d, --decimal         Print digests in decimal
    --string TEXT         Hash TEXT instead of files
    --utf16               Hash --string TEXT as UTF-16LE code units
    -v, --verbose         Report settings and byte counts on stderr
    -h, --help            Show this help message

EXAMPLES:
    murmur3sum data.bin
    cat data.bin | murmur3sum -b 32 -s 0x9747b28c
    murmur3sum --string 'Hello, World!' --utf16 -b 32 -d
"
  );
}

/// A finished digest of any width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sum {
  U32(u32),
  U64(u64),
  U128(UInt128),
}

impl Sum {
  fn render(self, decimal: bool) -> String {
    match (self, decimal) {
      (Self::U32(v), false) => format!("{v:08x}"),
      (Self::U64(v), false) => format!("{v:016x}"),
      (Self::U128(v), false) => format!("{v:x}"),
      (Self::U32(v), true) => v.to_string(),
      (Self::U64(v), true) => v.to_string(),
      (Self::U128(v), true) => v.as_u128().to_string(),
    }
  }
}

/// Drain `reader` through a seeded digest, returning the sum and byte count.
fn drain<H: StreamingHash, R: Read>(reader: R, seed: H::Seed) -> io::Result<(H::Output, u64)> {
  let mut reader = HashReader::<R, H>::with_seed(reader, seed);
  let n = io::copy(&mut reader, &mut io::sink())?;
  Ok((reader.sum(), n))
}

impl Args {
  fn hash<R: Read>(&self, reader: R) -> io::Result<(Sum, u64)> {
    Ok(match self.bits {
      Bits::B32 => {
        let (sum, n) = drain::<Digest32, R>(reader, self.seed as u32)?;
        (Sum::U32(sum), n)
      }
      Bits::B64 => {
        let (sum, n) = drain::<Digest64, R>(reader, self.seed)?;
        (Sum::U64(sum), n)
      }
      Bits::B128 => {
        let (sum, n) = drain::<Digest128, R>(reader, [self.seed, self.seed2.unwrap_or(self.seed)])?;
        (Sum::U128(sum), n)
      }
    })
  }

  fn hash_path(&self, path: &str) -> io::Result<(Sum, u64)> {
    if path == "-" {
      self.hash(io::stdin().lock())
    } else {
      self.hash(File::open(path)?)
    }
  }

  /// Bytes for `--string`.
  fn text_bytes(&self, text: &str) -> Vec<u8> {
    if self.utf16 {
      text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    } else {
      text.as_bytes().to_vec()
    }
  }
}

fn main() -> ExitCode {
  let args = match parse_args(env::args().skip(1)) {
    Ok(args) => args,
    Err(msg) => {
      eprintln!("error: {msg}");
      eprintln!("Run with --help for usage information.");
      return ExitCode::FAILURE;
    }
  };

  if args.help {
    print_help();
    return ExitCode::SUCCESS;
  }

  if args.verbose {
    match args.bits {
      Bits::B128 => eprintln!(
        "murmur3sum: {} bits, seeds {:#x} {:#x}",
        args.bits.width(),
        args.seed,
        args.seed2.unwrap_or(args.seed)
      ),
      _ => eprintln!("murmur3sum: {} bits, seed {:#x}", args.bits.width(), args.seed),
    }
  }

  if let Some(text) = &args.string {
    let bytes = args.text_bytes(text);
    return match args.hash(bytes.as_slice()) {
      Ok((sum, n)) => {
        if args.verbose {
          eprintln!("{text:?}: {n} bytes");
        }
        println!("{}  {text:?}", sum.render(args.decimal));
        ExitCode::SUCCESS
      }
      Err(err) => {
        eprintln!("error: {err}");
        ExitCode::FAILURE
      }
    };
  }

  let paths = if args.paths.is_empty() {
    vec!["-".to_string()]
  } else {
    args.paths.clone()
  };

  let mut failed = false;
  for path in &paths {
    match args.hash_path(path) {
      Ok((sum, n)) => {
        if args.verbose {
          eprintln!("{path}: {n} bytes");
        }
        println!("{}  {path}", sum.render(args.decimal));
      }
      Err(err) => {
        eprintln!("error: {path}: {err}");
        failed = true;
      }
    }
  }

  if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
