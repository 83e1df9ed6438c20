use crate::cache::get_cache_dir;
use crate::citations::Citation;
use anyhow::{Context, Result, bail};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A recombination map distributed as a gzipped tarball of per-chromosome
/// HapMap files.
#[derive(Clone, Debug)]
pub struct GeneticMap {
    pub id: String,
    pub species_id: String,
    pub description: String,
    pub long_description: String,
    pub url: String,
    pub sha256: String,
    /// File name inside the archive with `{id}` standing for the chromosome.
    pub file_pattern: String,
    pub citations: Vec<Citation>,
}

impl GeneticMap {
    pub fn cache_path(&self) -> PathBuf {
        get_cache_dir()
            .join("genetic_maps")
            .join(&self.species_id)
            .join(&self.id)
    }

    pub fn is_cached(&self) -> bool {
        self.cache_path().is_dir()
    }

    pub fn chromosome_file(&self, chromosome: &str) -> PathBuf {
        self.cache_path()
            .join(self.file_pattern.replace("{id}", chromosome))
    }

    /// Fetch, verify and unpack the map into the cache, replacing any copy
    /// already there.
    pub fn download(&self) -> Result<()> {
        let target = self.cache_path();
        let parent = target
            .parent()
            .context("genetic map cache path has no parent")?;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
        let staging = tempfile::tempdir_in(parent)?;
        let archive = staging.path().join("download.tar.gz");

        log::info!("Downloading genetic map '{}' from {}", self.id, self.url);
        let response = ureq::get(&self.url)
            .call()
            .with_context(|| format!("downloading {}", self.url))?;
        let mut file = File::create(&archive)?;
        std::io::copy(&mut response.into_reader(), &mut file)?;
        drop(file);

        install_archive(&archive, &self.sha256, &target)
    }
}

pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Check `archive` against `sha256`, unpack it next to `target`, then move
/// the result into place.
pub fn install_archive(archive: &Path, sha256: &str, target: &Path) -> Result<()> {
    let digest = sha256_file(archive)?;
    if !digest.eq_ignore_ascii_case(sha256) {
        bail!(
            "checksum mismatch for {}: expected {sha256}, got {digest}",
            archive.display()
        );
    }
    let parent = target
        .parent()
        .context("install target has no parent directory")?;
    std::fs::create_dir_all(parent)?;
    let unpack_dir = tempfile::tempdir_in(parent)?;
    let decoder = flate2::read::GzDecoder::new(File::open(archive)?);
    tar::Archive::new(decoder)
        .unpack(unpack_dir.path())
        .with_context(|| format!("unpacking {}", archive.display()))?;

    if target.exists() {
        log::debug!("Replacing cached copy at {}", target.display());
        std::fs::remove_dir_all(target)?;
    }
    let unpacked = unpack_dir.keep();
    std::fs::rename(&unpacked, target)
        .with_context(|| format!("moving genetic map into {}", target.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;

    fn make_archive(dir: &Path) -> PathBuf {
        let path = dir.join("map.tar.gz");
        let enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        let mut builder = tar::Builder::new(enc);
        let body = b"Chromosome Position(bp) Rate(cM/Mb) Map(cM)\nchr1 1 1.0 0.0\n";
        let mut header = tar::Header::new_gnu();
        header.set_size(body.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, "map_chr1.txt", &body[..])
            .unwrap();
        builder.into_inner().unwrap().finish().unwrap();
        path
    }

    #[test]
    fn install_verifies_and_unpacks() {
        let dir = tempfile::tempdir().unwrap();
        let archive = make_archive(dir.path());
        let digest = sha256_file(&archive).unwrap();
        let target = dir.path().join("cache").join("Sp").join("Map");
        install_archive(&archive, &digest, &target).unwrap();
        assert!(target.join("map_chr1.txt").is_file());
        // a second install replaces the first
        install_archive(&archive, &digest, &target).unwrap();
        assert!(target.join("map_chr1.txt").is_file());
    }

    #[test]
    fn bad_checksum_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let archive = make_archive(dir.path());
        let target = dir.path().join("out");
        let err = install_archive(&archive, "00", &target).unwrap_err();
        assert!(err.to_string().contains("checksum mismatch"));
        assert!(!target.exists());
    }

    #[test]
    fn chromosome_file_follows_pattern() {
        let gm = GeneticMap {
            id: "TestMap".into(),
            species_id: "ZweBerg".into(),
            description: String::new(),
            long_description: String::new(),
            url: String::new(),
            sha256: String::new(),
            file_pattern: "map_chr{id}.txt".into(),
            citations: vec![],
        };
        let p = gm.chromosome_file("3");
        assert!(p.ends_with("genetic_maps/ZweBerg/TestMap/map_chr3.txt"));
    }
}
