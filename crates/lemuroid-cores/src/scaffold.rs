//! Gradle + manifest files for a core's dynamic-feature module.

use crate::errors::Result;
use crate::paths::Layout;
use crate::types::DeliveryMode;
use std::fs;
use std::path::Path;

const DELIVERY_INSTALL_TIME: &str = "<dist:install-time/>";

const DELIVERY_ON_DEMAND: &str = r#"
<dist:on-demand />
<dist:install-time>
    <dist:conditions>
        <dist:device-feature dist:name="android.software.leanback"/>
    </dist:conditions>
</dist:install-time>
"#;

impl DeliveryMode {
    pub fn block(self) -> &'static str {
        match self {
            DeliveryMode::OnDemand => DELIVERY_ON_DEMAND,
            DeliveryMode::InstallTime => DELIVERY_INSTALL_TIME,
        }
    }
}

pub fn render_gradle(local: &str) -> String {
    format!(
        r#"
plugins {{
    id("com.android.dynamic-feature")
    id("kotlin-android")
    id("kotlin-kapt")
}}

android {{
    namespace = "com.swordfish.lemuroid.core.{local}"
    defaultConfig {{
        missingDimensionStrategy("opensource", "play")
        missingDimensionStrategy("cores", "dynamic")
    }}
    packagingOptions {{
        doNotStrip("*/*/*_libretro_android.so")
    }}
}}

dependencies {{
    implementation(project(":lemuroid-app"))
    implementation(kotlin(deps.libs.kotlin.stdlib))
}}
"#
    )
}

pub fn render_manifest(local: &str, delivery: DeliveryMode) -> String {
    let delivery = delivery.block();
    format!(
        r#"
<manifest xmlns:dist="http://schemas.android.com/apk/distribution"
    xmlns:android="http://schemas.android.com/apk/res/android">

    <application
        android:hasCode="false"
        android:extractNativeLibs="true" />

    <dist:module dist:title="@string/core_name_{local}">
        <dist:delivery>
            {delivery}
        </dist:delivery>
        <dist:fusing dist:include="true" />
    </dist:module>
</manifest>
"#
    )
}

/// Write the module's `build.gradle.kts` and `AndroidManifest.xml`,
/// replacing whatever is there.
pub fn write(layout: &Layout, local: &str, delivery: DeliveryMode) -> Result<()> {
    write_file(&layout.build_file(local), &render_gradle(local))?;
    write_file(
        &layout.manifest_file(local),
        &render_manifest(local, delivery),
    )
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
