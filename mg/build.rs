use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    // Type-level assertions for every slice of every short sequence, checked against the same
    // skip/take on a plain `Vec`.
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("slices.rs");
    let mut f = BufWriter::new(File::create(&dest_path)?);

    let max_len = 6;
    let max_index = max_len + 2;

    // Distinct marker types so that a misplaced element cannot accidentally compare equal
    for i in 0..max_len {
        writeln!(f, "#[allow(dead_code)] struct E{};", i)?;
    }
    writeln!(f)?;

    for len in 0..=max_len {
        let elements = Elements((0..len).collect());
        for start in 0..=max_index {
            for count in 0..=max_index {
                let expected = Elements(elements.0.iter().copied().skip(start).take(count).collect());
                writeln!(
                    f,
                    "assert_type_eq_all!(Sliced<Seq<{}>, {}, {}>, Seq<{}>);",
                    elements, start, count, expected
                )?;
            }
        }
    }

    f.flush()?;
    Ok(())
}

/// A tuple type of marker types, written out as Rust source.
struct Elements(Vec<usize>);

impl Display for Elements {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.0.iter().enumerate() {
            write!(f, "E{}", e)?;
            if i + 1 < self.0.len() {
                write!(f, ", ")?;
            }
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
