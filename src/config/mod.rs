use anyhow::{ensure, Context};
use derive_builder::Builder;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Environment variable overriding where the template tree is read from.
pub const TEMPLATE_ENV: &str = "SPA_INIT_TEMPLATE";

/// Where a scaffolding run reads from and resolves relative targets
/// against. Computed once at process start and passed explicitly into
/// [`crate::create_project`], so tests can inject fake roots.
#[derive(Builder, Debug)]
pub struct ScaffoldDirs {
    template_root: PathBuf,
    invocation_dir: PathBuf,
}

impl ScaffoldDirs {
    /// Create a new [`ScaffoldDirs`] builder
    #[must_use]
    pub fn builder() -> ScaffoldDirsBuilder {
        ScaffoldDirsBuilder::create_empty()
    }

    /// Attempt to create a new [`ScaffoldDirs`] instance with sane
    /// defaults for path locations
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if no template root can be resolved or the
    /// current working directory is invalid
    pub fn default_paths() -> anyhow::Result<Self> {
        Ok(Self {
            template_root: Self::get_template_root()?,
            invocation_dir: Self::get_current_dir()?,
        })
    }

    /// Returns the path where the template tree lives
    ///
    /// Looks for the template root, in order:
    /// - `$SPA_INIT_TEMPLATE`
    /// - `template/` next to the executable
    /// - `<platform data dir>/spa-init/template`
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if none of the candidates is a directory
    pub fn get_template_root() -> anyhow::Result<PathBuf> {
        if let Ok(overridden) = std::env::var(TEMPLATE_ENV) {
            // Resolve a relative override against the working directory,
            // so the containment check and the copy agree on one base.
            let path = crate::paths::resolve(&Self::get_current_dir()?, Path::new(&overridden));
            ensure!(
                path.is_dir(),
                "{TEMPLATE_ENV} does not point to a directory: {}",
                path.display()
            );
            return Ok(path);
        }

        let exe = std::env::current_exe().context("Failed to get executable path")?;
        if let Some(dir) = exe.parent() {
            let local = dir.join("template");
            if local.is_dir() {
                return Ok(local);
            }
        }

        let data = BaseDirs::new()
            .context("Failed to get user's base directories")?
            .data_dir()
            .join("spa-init")
            .join("template");

        ensure!(
            data.is_dir(),
            "No template found at {} (set {TEMPLATE_ENV} to override)",
            data.display()
        );

        Ok(data)
    }

    /// Returns the current working directory as a [`PathBuf`]
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the current working directory value is invalid.
    /// Possible cases:
    ///
    /// * Current directory does not exist.
    /// * There are insufficient permissions to access the current directory.
    pub fn get_current_dir() -> anyhow::Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }

    /// Returns a reference to the template root of this [`ScaffoldDirs`].
    #[must_use]
    pub fn template_root(&self) -> &Path {
        self.template_root.as_path()
    }

    /// Returns a reference to the invocation dir of this [`ScaffoldDirs`].
    #[must_use]
    pub fn invocation_dir(&self) -> &Path {
        self.invocation_dir.as_path()
    }
}
