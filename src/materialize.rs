use crate::error::{Error, Result};
use crate::lang::ExtensionTable;
use crate::naming::{block_suffix_len, heading_file_stem, simple_file_stem};
use crate::types::{ExtractedBlock, NamingScheme, Options, WrittenBlock};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the build template written next to heading-scheme output
pub const MAKEFILE_NAME: &str = "Makefile";

/// Builds every `.c` file in the output directory into a like-named program.
pub const TEMPLATE_MAKEFILE: &str = "\
# Simple Makefile to compile each C script extracted by md2code
# This is generated from a template

CC := gcc
CFLAGS := -g3 -Wall -c -time -v --std=c2x

SRCS := $(wildcard *.c)
PROGS := $(patsubst %.c,%,$(SRCS))

all: $(PROGS)

# Rule to compile each C file
%: %.c
\t$(CC) $(CFLAGS) -o $@ $<

clean:
\trm -f $(PROGS)

";

/// Write each block to its own file under `output_dir`.
///
/// Existing files are overwritten. Any I/O failure aborts the remaining batch.
/// A name limit too short for the block suffix is rejected before anything is written.
pub fn materialize(
    blocks: &[ExtractedBlock],
    output_dir: &Path,
    extensions: &ExtensionTable,
    options: &Options,
) -> Result<Vec<WrittenBlock>> {
    check_name_limit(blocks.len(), options)?;

    fs::create_dir_all(output_dir).map_err(|source| Error::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    if options.scheme == NamingScheme::Heading {
        let makefile = output_dir.join(MAKEFILE_NAME);
        write_file(&makefile, TEMPLATE_MAKEFILE)?;
        debug!("Wrote build template to {}", makefile.display());
    }

    let total = blocks.len();
    let mut written = Vec::with_capacity(total);

    for (i, block) in blocks.iter().enumerate() {
        let index = i + 1;
        let path = block_path(block, index, total, output_dir, extensions, options)?;

        match options.scheme {
            NamingScheme::Heading => write_file(&path, &format!("{}\n", block.content))?,
            NamingScheme::Simple => write_file(&path, &block.content)?,
        }

        if options.verbose {
            println!(
                "Saved Code Block {} ({}) to {}",
                index,
                block.language,
                path.display()
            );
        }

        written.push(WrittenBlock {
            index,
            language: block.language.clone(),
            path,
        });
    }

    info!(
        "Wrote {} code blocks to {}",
        written.len(),
        output_dir.display()
    );
    Ok(written)
}

/// Destination path for the `index`-th (1-based) of `total` blocks.
pub fn block_path(
    block: &ExtractedBlock,
    index: usize,
    total: usize,
    output_dir: &Path,
    extensions: &ExtensionTable,
    options: &Options,
) -> Result<PathBuf> {
    let stem = match options.scheme {
        NamingScheme::Simple => simple_file_stem(index),
        NamingScheme::Heading => {
            heading_file_stem(&block.heading, index, total, options.max_filename_length)
                .ok_or(Error::NameLimitTooShort {
                    limit: options.max_filename_length,
                    required: block_suffix_len(total),
                })?
        }
    };
    Ok(output_dir.join(format!("{}.{}", stem, extensions.resolve(&block.language))))
}

fn check_name_limit(total: usize, options: &Options) -> Result<()> {
    if options.scheme != NamingScheme::Heading || total == 0 {
        return Ok(());
    }
    let required = block_suffix_len(total);
    if options.max_filename_length < required {
        return Err(Error::NameLimitTooShort {
            limit: options.max_filename_length,
            required,
        });
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let to_error = |source: std::io::Error| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    let mut f = BufWriter::new(File::create(path).map_err(to_error)?);
    f.write_all(content.as_bytes()).map_err(to_error)?;
    f.flush().map_err(to_error)
}
