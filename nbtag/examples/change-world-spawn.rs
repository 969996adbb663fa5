//! This executable takes a path to a level.dat file for a world, and writes a
//! new level.dat file in the current directory with the world spawn set to
//! 0,100,0. Every other tag is written back exactly as it was read.

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use nbtag::{error::Error, NamedTag, Value};

fn main() -> nbtag::error::Result<()> {
    let args: Vec<_> = std::env::args_os().collect();
    let file = std::fs::File::open(&args[1])?;

    let mut leveldat: NamedTag = nbtag::from_reader(GzDecoder::new(file))?;

    let data = leveldat
        .value_mut()
        .as_compound_mut()
        .and_then(|level| level.get_mut("Data"))
        .and_then(Value::as_compound_mut);

    let data = match data {
        Some(data) => data,
        None => {
            eprintln!("level.dat has no Data compound");
            return Ok(());
        }
    };

    data.put("SpawnX", 0i32);
    data.put("SpawnY", 100i32);
    data.put("SpawnZ", 0i32);

    let outfile = std::fs::File::create("level.dat")?;
    let mut encoder = GzEncoder::new(outfile, Compression::fast());
    nbtag::to_writer(&mut encoder, &leveldat)?;
    encoder.finish().map_err(Error::from)?;

    Ok(())
}
