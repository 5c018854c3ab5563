use super::LogisticRegression;
use super::Pipeline;
use super::StandardScaler;
use crate::Feature;
use crate::N_CLASSES;
use crate::N_FEATURES;
use byteorder::BE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::io::Read;
use std::io::Write;
use std::path::Path;

/// Why an artifact could not be read or written.
#[derive(Debug)]
pub enum ArtifactError {
    Io(std::io::Error),
    Truncated,
    Magic,
    Version(u16),
    Shape { features: u16, classes: u16 },
    NonFinite,
    Footer(u16),
    Trailing,
}

impl std::fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "artifact io: {}", e),
            Self::Truncated => write!(f, "artifact is truncated"),
            Self::Magic => write!(f, "not a pipeline artifact"),
            Self::Version(v) => write!(f, "unsupported artifact version {}", v),
            Self::Shape { features, classes } => write!(
                f,
                "artifact shape {}x{} does not match {}x{}",
                classes, features, N_CLASSES, N_FEATURES
            ),
            Self::NonFinite => write!(f, "artifact holds non-finite or zero-scale parameters"),
            Self::Footer(x) => write!(f, "bad artifact trailer {:#06x}", x),
            Self::Trailing => write!(f, "unexpected bytes after artifact trailer"),
        }
    }
}

impl std::error::Error for ArtifactError {}

impl From<std::io::Error> for ArtifactError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::Truncated,
            _ => Self::Io(e),
        }
    }
}

/// Big-endian binary persistence.
///
/// Layout: magic, `u16` version, `u16` features, `u16` classes, the
/// `f64` parameters, then a `u16` trailer. Nothing may follow the trailer.
pub trait Artifact: Sized {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), ArtifactError>;
    fn decode<R: Read>(reader: &mut R) -> Result<Self, ArtifactError>;

    fn magic() -> &'static [u8; 8] {
        b"IRISPIPE"
    }
    fn version() -> u16 {
        1
    }
    fn footer() -> u16 {
        0xFFFF
    }
    /// Check if file exists on disk.
    fn done(path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
    /// Read from disk.
    fn load(path: &Path) -> Result<Self, ArtifactError> {
        log::debug!("loading artifact {}", path.display());
        let bytes = std::fs::read(path)?;
        Self::decode(&mut bytes.as_slice())
    }
    /// Write to disk. Goes through a sibling temp file so readers never
    /// observe a partial artifact.
    fn save(&self, path: &Path) -> Result<(), ArtifactError> {
        log::info!("saving artifact {}", path.display());
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let ref temp = path.with_extension("tmp");
        let mut bytes = Vec::new();
        self.encode(&mut bytes)?;
        std::fs::write(temp, bytes)?;
        std::fs::rename(temp, path)?;
        Ok(())
    }
}

impl Artifact for Pipeline {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), ArtifactError> {
        writer.write_all(Self::magic())?;
        writer.write_u16::<BE>(Self::version())?;
        writer.write_u16::<BE>(N_FEATURES as u16)?;
        writer.write_u16::<BE>(N_CLASSES as u16)?;
        let scaler = self.scaler();
        let classifier = self.classifier();
        for x in scaler
            .means()
            .iter()
            .chain(scaler.scales().iter())
            .chain(classifier.weights().iter().flatten())
            .chain(classifier.biases().iter())
        {
            writer.write_f64::<BE>(*x)?;
        }
        writer.write_u16::<BE>(Self::footer())?;
        Ok(())
    }

    fn decode<R: Read>(reader: &mut R) -> Result<Self, ArtifactError> {
        let mut magic = [0u8; 8];
        reader.read_exact(&mut magic)?;
        if &magic != Self::magic() {
            return Err(ArtifactError::Magic);
        }
        match reader.read_u16::<BE>()? {
            v if v == Self::version() => {}
            v => return Err(ArtifactError::Version(v)),
        }
        let features = reader.read_u16::<BE>()?;
        let classes = reader.read_u16::<BE>()?;
        if features as usize != N_FEATURES || classes as usize != N_CLASSES {
            return Err(ArtifactError::Shape { features, classes });
        }
        let means = read_array::<R, N_FEATURES>(reader)?;
        let scales = read_array::<R, N_FEATURES>(reader)?;
        let mut weights = [[0.; N_FEATURES]; N_CLASSES];
        for row in weights.iter_mut() {
            *row = read_array::<R, N_FEATURES>(reader)?;
        }
        let biases = read_array::<R, N_CLASSES>(reader)?;
        match reader.read_u16::<BE>()? {
            x if x == Self::footer() => {}
            x => return Err(ArtifactError::Footer(x)),
        }
        if reader.read(&mut [0u8; 1])? > 0 {
            return Err(ArtifactError::Trailing);
        }
        if scales.iter().any(|s| *s == 0.) {
            return Err(ArtifactError::NonFinite);
        }
        Ok(Self::new(
            StandardScaler::new(means, scales),
            LogisticRegression::new(weights, biases),
        ))
    }
}

fn read_array<R: Read, const N: usize>(reader: &mut R) -> Result<[Feature; N], ArtifactError> {
    let mut array = [0.; N];
    for x in array.iter_mut() {
        *x = reader.read_f64::<BE>()?;
        if !x.is_finite() {
            return Err(ArtifactError::NonFinite);
        }
    }
    Ok(array)
}
