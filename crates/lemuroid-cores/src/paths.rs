use crate::types::Arch;
use std::path::{Path, PathBuf};

pub const BUNDLED_CORES_DIR: &str = "bundled-cores";
pub const CORE_DIR_PREFIX: &str = "lemuroid_core_";

/// `<core>_libretro_android.so`, as published upstream.
pub fn libretro_so_name(core: &str) -> String {
    format!("{core}_libretro_android.so")
}

/// `<core>_libretro_android.so.zip`
pub fn archive_name(core: &str) -> String {
    format!("{}.zip", libretro_so_name(core))
}

/// `lib<local>_libretro_android.so`, as loaded by the app.
pub fn lemuroid_so_name(local: &str) -> String {
    format!("lib{}", libretro_so_name(local))
}

/// Output tree rooted at the Gradle project directory.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// <root>/lemuroid_core_<local>
    pub fn core_module_dir(&self, local: &str) -> PathBuf {
        self.root.join(format!("{CORE_DIR_PREFIX}{local}"))
    }

    /// <root>/lemuroid_core_<local>/build.gradle.kts
    pub fn build_file(&self, local: &str) -> PathBuf {
        self.core_module_dir(local).join("build.gradle.kts")
    }

    /// <root>/lemuroid_core_<local>/src/main/AndroidManifest.xml
    pub fn manifest_file(&self, local: &str) -> PathBuf {
        self.core_module_dir(local)
            .join("src")
            .join("main")
            .join("AndroidManifest.xml")
    }

    /// <root>/lemuroid_core_<local>/src/main/jniLibs/<arch>
    pub fn arch_dir(&self, local: &str, arch: Arch) -> PathBuf {
        jni_libs(&self.core_module_dir(local)).join(arch.as_str())
    }

    /// <root>/lemuroid_core_<local>/src/main/jniLibs/<arch>/lib<local>_libretro_android.so
    pub fn module_binary(&self, local: &str, arch: Arch) -> PathBuf {
        self.arch_dir(local, arch).join(lemuroid_so_name(local))
    }

    /// <root>/bundled-cores/src/main/jniLibs/<arch>
    pub fn bundled_arch_dir(&self, arch: Arch) -> PathBuf {
        jni_libs(&self.root.join(BUNDLED_CORES_DIR)).join(arch.as_str())
    }

    /// <root>/bundled-cores/src/main/jniLibs/<arch>/lib<local>_libretro_android.so
    pub fn bundled_binary(&self, local: &str, arch: Arch) -> PathBuf {
        self.bundled_arch_dir(arch).join(lemuroid_so_name(local))
    }
}

fn jni_libs(module: &Path) -> PathBuf {
    module.join("src").join("main").join("jniLibs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_lemuroid_convention() {
        assert_eq!(archive_name("melondsds"), "melondsds_libretro_android.so.zip");
        assert_eq!(lemuroid_so_name("melonds"), "libmelonds_libretro_android.so");
    }

    #[test]
    fn layout_places_module_and_bundled_binaries() {
        let l = Layout::new("out");
        assert_eq!(
            l.module_binary("handy", Arch::Arm64V8a),
            Path::new("out/lemuroid_core_handy/src/main/jniLibs/arm64-v8a/libhandy_libretro_android.so")
        );
        assert_eq!(
            l.bundled_binary("handy", Arch::Arm64V8a),
            Path::new("out/bundled-cores/src/main/jniLibs/arm64-v8a/libhandy_libretro_android.so")
        );
        assert_eq!(
            l.manifest_file("handy"),
            Path::new("out/lemuroid_core_handy/src/main/AndroidManifest.xml")
        );
    }
}
