use crate::command::{operands, wants_usage, Command, CommandResult};
use crate::commands::{create_target, ensure_distinct, open_source};
use crate::config::SessionOptions;
use crate::context::SessionContext;
use crate::error::FileManagerError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appended to every `compress` destination.
pub const COMPRESSED_SUFFIX: &str = ".br";

pub struct CompressCommand;
pub struct DecompressCommand;

const COMPRESS_USAGE: &str = "Usage: compress <src> <dst>\nBrotli-compress a file into <dst>.br.";
const DECOMPRESS_USAGE: &str = "Usage: decompress <src> <dst>\nExpand a Brotli file into <dst>.";

impl Command for CompressCommand {
    fn execute(&self, args: &[String], ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        if wants_usage(args) {
            return Ok(COMPRESS_USAGE.to_string());
        }
        let ops = operands(args, 2)?;
        let (src_arg, dst_arg) = (&ops[0], &ops[1]);

        let src = ctx.require_file(src_arg, FileManagerError::InvalidSource)?;
        let dst = with_suffix(ctx.resolve(dst_arg));
        log::debug!("[compress] {} -> {}", src.display(), dst.display());

        compress_file(&src, &dst, &ctx.options).map_err(|e| {
            log::warn!("[compress] {} -> {}: {}", src.display(), dst.display(), e);
            FileManagerError::io("compressing file", e)
        })?;
        Ok(format!("File compressed: {} -> {}{}", src_arg, dst_arg, COMPRESSED_SUFFIX))
    }
}

impl Command for DecompressCommand {
    fn execute(&self, args: &[String], ctx: &mut SessionContext, _out: &mut dyn Write) -> CommandResult {
        if wants_usage(args) {
            return Ok(DECOMPRESS_USAGE.to_string());
        }
        let ops = operands(args, 2)?;
        let (src_arg, dst_arg) = (&ops[0], &ops[1]);

        let src = ctx.require_file(src_arg, FileManagerError::InvalidSource)?;
        let dst = ctx.resolve(dst_arg);
        log::debug!("[decompress] {} -> {}", src.display(), dst.display());

        decompress_file(&src, &dst, &ctx.options).map_err(|e| {
            log::warn!("[decompress] {} -> {}: {}", src.display(), dst.display(), e);
            FileManagerError::io("decompressing file", e)
        })?;
        Ok(format!("File decompressed: {} -> {}", src_arg, dst_arg))
    }
}

fn with_suffix(path: PathBuf) -> PathBuf {
    let mut raw = path.into_os_string();
    raw.push(COMPRESSED_SUFFIX);
    PathBuf::from(raw)
}

pub fn compress_file(src: &Path, dst: &Path, options: &SessionOptions) -> io::Result<()> {
    ensure_distinct(src, dst)?;
    let mut reader = open_source(src, options.buffer_size)?;
    let writer = create_target(dst, options.buffer_size)?;
    let mut encoder = brotli::CompressorWriter::new(
        writer,
        options.buffer_size,
        options.compression_quality,
        options.compression_window,
    );
    io::copy(&mut reader, &mut encoder)?;
    // flush surfaces write errors; into_inner only appends the stream trailer
    encoder.flush()?;
    let mut writer = encoder.into_inner();
    writer.flush()
}

/// Corrupt input comes back as an `InvalidData` error, not a panic.
pub fn decompress_file(src: &Path, dst: &Path, options: &SessionOptions) -> io::Result<()> {
    ensure_distinct(src, dst)?;
    let reader = open_source(src, options.buffer_size)?;
    let mut decoder = brotli::Decompressor::new(reader, options.buffer_size);
    let mut writer = create_target(dst, options.buffer_size)?;
    io::copy(&mut decoder, &mut writer)?;
    writer.flush()
}
