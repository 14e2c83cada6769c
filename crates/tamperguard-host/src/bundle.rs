use camino::Utf8Path;
use std::fs::File;
use std::io::BufReader;
use tamperguard_domain::ProviderError;
use tamperguard_domain::facts::sum_entry_crcs;
use zip::ZipArchive;
use zip::result::ZipError;

type Archive = ZipArchive<BufReader<File>>;

fn open(bundle: &Utf8Path) -> Result<Archive, ProviderError> {
    let file = File::open(bundle).map_err(|source| ProviderError::Io {
        path: bundle.to_path_buf(),
        source,
    })?;
    ZipArchive::new(BufReader::new(file)).map_err(|err| archive_error(bundle, err))
}

fn archive_error(bundle: &Utf8Path, err: ZipError) -> ProviderError {
    match err {
        ZipError::Io(source) => ProviderError::Io {
            path: bundle.to_path_buf(),
            source,
        },
        other => ProviderError::Bundle {
            bundle: bundle.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

/// CRC-32 of `entry` as recorded in the archive's central directory, `None` if absent.
fn lookup(
    archive: &mut Archive,
    bundle: &Utf8Path,
    entry: &str,
) -> Result<Option<u32>, ProviderError> {
    match archive.by_name(entry) {
        Ok(file) => Ok(Some(file.crc32())),
        Err(ZipError::FileNotFound) => Ok(None),
        Err(err) => Err(archive_error(bundle, err)),
    }
}

/// CRC-32 of a single archive entry.
pub fn entry_crc(bundle: &Utf8Path, entry: &str) -> Result<Option<u32>, ProviderError> {
    let mut archive = open(bundle)?;
    lookup(&mut archive, bundle, entry)
}

/// Sum of the CRCs of `code_entry` and its numbered parts, opening the archive once for the
/// whole walk.
pub fn bundle_checksum(bundle: &Utf8Path, code_entry: &str) -> Result<u64, ProviderError> {
    let mut archive = open(bundle)?;
    tracing::debug!(bundle = %bundle, entries = archive.len(), "opened bundle");
    sum_entry_crcs(bundle, code_entry, |entry| lookup(&mut archive, bundle, entry))
}
