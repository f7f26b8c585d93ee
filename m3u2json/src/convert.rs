use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use iptvlist_rs::{Parser, format::M3uDocument};
use log::info;

use crate::{Config, errors::ConvertError};

/// Parse a playlist from `reader` and write its json document to `writer`
pub fn convert(
    reader: impl BufRead + 'static,
    mut writer: impl Write,
    config: &Config,
) -> Result<M3uDocument, ConvertError> {
    let mut parser = Parser::with_options(reader, config.parser_options());
    parser.parse()?;
    let document = parser.get_result();

    info!(
        "Parsed {} entries in {} groups, {} playlists",
        document.entry_count(),
        document.groups().count(),
        document.playlists().count()
    );

    if config.pretty() {
        serde_json::to_writer_pretty(&mut writer, &document)?;
    } else {
        serde_json::to_writer(&mut writer, &document)?;
    }
    writer.flush()?;

    Ok(document)
}

pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &Config,
) -> Result<M3uDocument> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let reader = File::open(input)
        .with_context(|| format!("failed to open input file {}", input.display()))?;
    let writer = File::create(output)
        .with_context(|| format!("failed to create output file {}", output.display()))?;

    let document = convert(BufReader::new(reader), BufWriter::new(writer), config)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    Ok(document)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_convert_compact() {
        let config = Config {
            pretty: Some(false),
            ..Default::default()
        };
        let mut output = Vec::new();
        convert(
            Cursor::new("#EXTM3U\n#EXTINF:-1 type=\"playlist\",L\nhttp://l.m3u\n"),
            &mut output,
            &config,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            r#"[{"type":"playlist_block","name":"L","url":"http://l.m3u"}]"#
        );
    }

    #[test]
    fn test_convert_empty() {
        let mut output = Vec::new();
        let document = convert(Cursor::new(""), &mut output, &Config::default()).unwrap();
        assert!(document.is_empty());
        assert_eq!(output, b"[]");
    }

    #[test]
    fn test_convert_invalid_utf8() {
        let mut output = Vec::new();
        let result = convert(Cursor::new(vec![0xc3, 0x28]), &mut output, &Config::default());
        assert!(matches!(result, Err(ConvertError::ParseError(_))));
    }
}
