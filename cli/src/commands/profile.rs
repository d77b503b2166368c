use std::path::PathBuf;

use bodyscale_common::config::{Config, Locale};
use bodyscale_common::error::CapabilityError;
use bodyscale_common::{success, warn};
use bodyscale_core::capability::{BarcodeSource, Camera, PhotoSharer, UrlOpener};
use bodyscale_core::session::{Notice, ProfileSession};
use serde::Serialize;

use crate::adapters::{FileCamera, StdinBarcodes, StdoutSharer, SystemOpener};
use crate::terminal::print;

/// Password for the mock sign-in. Kept out of argv so it never shows up in `ps`.
const PASSWORD_ENV: &str = "BODYSCALE_PASSWORD";

pub struct ProfileOptions {
    pub photo: Option<PathBuf>,
    pub share: bool,
    pub scan: bool,
    pub open: bool,
    pub user: String,
}

/// The capabilities one run of the flow talks to.
pub struct Devices<'a> {
    pub camera: &'a mut dyn Camera,
    pub barcodes: &'a mut dyn BarcodeSource,
    pub opener: &'a mut dyn UrlOpener,
    pub sharer: &'a mut dyn PhotoSharer,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Summary {
    pub permission: bool,
    pub photo: Option<String>,
    pub qr_data: Option<String>,
    pub link: Option<String>,
    pub user: String,
}

pub async fn profile(opts: ProfileOptions, cfg: &Config) -> anyhow::Result<()> {
    let mut camera = FileCamera::new(opts.photo.clone());
    let mut barcodes = StdinBarcodes::new();
    let mut opener = SystemOpener;
    let mut sharer = StdoutSharer;

    let devices = Devices {
        camera: &mut camera,
        barcodes: &mut barcodes,
        opener: &mut opener,
        sharer: &mut sharer,
    };
    let password = std::env::var(PASSWORD_ENV).unwrap_or_default();

    let summary = run(&opts, &password, devices, cfg).await;

    if cfg.json {
        return print::json(&summary);
    }
    if cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(())
}

/// Walks the screen top to bottom: photo, QR, sign-in, sign-out.
///
/// Capability failures are shown and skipped, never returned.
pub async fn run(opts: &ProfileOptions, password: &str, devices: Devices<'_>, cfg: &Config) -> Summary {
    let Devices { camera, barcodes, opener, sharer } = devices;
    let mut session = ProfileSession::new();
    let locale = cfg.locale;

    let permission = session.ensure_permission(&mut *camera).await;
    if permission {
        match session.take_photo(&mut *camera).await {
            Ok(uri) => success!("photo captured: {uri}"),
            Err(e) => capability_failed(&e, locale),
        }
        if opts.share {
            if let Err(e) = session.share_photo(&mut *sharer).await {
                capability_failed(&e, locale);
            }
        }
    } else {
        capability_failed(&CapabilityError::PermissionDenied, locale);
    }

    if opts.scan && permission {
        match session.scan(&mut *barcodes).await {
            Ok(Some(notice)) => show(&notice, locale),
            Ok(None) => warn!("no QR payload received"),
            Err(e) => capability_failed(&e, locale),
        }
        if opts.open {
            if let Some(notice) = session.open_link(&mut *opener).await {
                show(&notice, locale);
            }
        }
    }

    session.set_credentials(opts.user.as_str(), password);
    show(&session.login(), locale);

    let summary = Summary {
        permission,
        photo: session.photo().map(String::from),
        qr_data: session.qr_data().map(String::from),
        link: session.link().map(String::from),
        user: session.username().to_string(),
    };

    show(&session.logout(), locale);
    summary
}

fn show(notice: &Notice, locale: Locale) {
    print::alert(notice.title(locale), &notice.message(locale));
}

fn capability_failed(error: &CapabilityError, locale: Locale) {
    match (error, locale) {
        (CapabilityError::PermissionDenied, Locale::Es) => {
            warn!("Necesitas permitir acceso a la cámara")
        }
        (CapabilityError::PermissionDenied, Locale::En) => {
            warn!("Camera access is required (pass --photo)")
        }
        (e, _) => warn!("{e}"),
    }
}
