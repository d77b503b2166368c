//! # Profile Session
//!
//! State behind the mock-login screen: a profile photo, a pair of
//! credentials and a QR scanner whose last payload may be a link.
//!
//! The session never validates credentials and never retries a failed
//! capability call. Every failure becomes a [`Notice`] (or a
//! [`CapabilityError`] for the caller to show) and the state stays as it was.

use bodyscale_common::config::Locale;
use bodyscale_common::error::{CapabilityError, CapabilityResult};
use tracing::{debug, info, warn};

use crate::capability::{BarcodeSource, Camera, PhotoSharer, PhotoUri, UrlOpener};

/// A short message for the user, shown as a notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    QrDetected(String),
    LinkFailed,
    LoggedIn { username: String, password_set: bool },
    LoggedOut,
}

impl Notice {
    pub fn title(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Notice::QrDetected(_)) => "QR detected",
            (Locale::En, Notice::LinkFailed) => "Error",
            (Locale::En, Notice::LoggedIn { .. }) => "Signed in",
            (Locale::En, Notice::LoggedOut) => "Signed out",
            (Locale::Es, Notice::QrDetected(_)) => "QR detectado",
            (Locale::Es, Notice::LinkFailed) => "Error",
            (Locale::Es, Notice::LoggedIn { .. }) => "Sesión iniciada",
            (Locale::Es, Notice::LoggedOut) => "Sesión cerrada",
        }
    }

    pub fn message(&self, locale: Locale) -> String {
        match (locale, self) {
            (Locale::En, Notice::QrDetected(data)) => format!("Content: {data}"),
            (Locale::Es, Notice::QrDetected(data)) => format!("Contenido: {data}"),
            (Locale::En, Notice::LinkFailed) => "Could not open the link.".into(),
            (Locale::Es, Notice::LinkFailed) => "No se pudo abrir el enlace.".into(),
            (Locale::En, Notice::LoggedIn { username, password_set }) => {
                format!("User: {username}\nPassword: {}", mask(*password_set))
            }
            (Locale::Es, Notice::LoggedIn { username, password_set }) => {
                format!("Usuario: {username}\nContraseña: {}", mask(*password_set))
            }
            (Locale::En, Notice::LoggedOut) => "You have signed out successfully.".into(),
            (Locale::Es, Notice::LoggedOut) => "Has cerrado sesión correctamente.".into(),
        }
    }
}

fn mask(password_set: bool) -> &'static str {
    if password_set { "********" } else { "(empty)" }
}

/// Whether `text` should be offered as a link.
pub fn is_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

#[derive(Debug, Default)]
pub struct ProfileSession {
    /// `None` until the camera has been asked.
    permission: Option<bool>,
    photo: Option<PhotoUri>,
    username: String,
    password: String,
    scanning: bool,
    qr_data: Option<String>,
}

impl ProfileSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permission(&self) -> Option<bool> {
        self.permission
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn qr_data(&self) -> Option<&str> {
        self.qr_data.as_deref()
    }

    /// Asks the camera for access unless it was already granted.
    ///
    /// A refusal is remembered but does not stop a later call from asking again.
    pub async fn ensure_permission(&mut self, camera: &mut dyn Camera) -> bool {
        if self.permission == Some(true) {
            return true;
        }

        let granted = camera.request_permission().await;
        if !granted {
            warn!("camera permission denied");
        }
        self.permission = Some(granted);
        granted
    }

    fn require_permission(&self) -> CapabilityResult<()> {
        match self.permission {
            Some(true) => Ok(()),
            _ => Err(CapabilityError::PermissionDenied),
        }
    }

    pub async fn take_photo(&mut self, camera: &mut dyn Camera) -> CapabilityResult<&str> {
        self.require_permission()?;

        let uri = camera.capture().await?;
        info!(uri = %uri, "photo captured");
        Ok(self.photo.insert(uri).as_str())
    }

    pub fn retake(&mut self) {
        self.photo = None;
    }

    /// Hands the current photo to the sharer. Returns `false` when there is no photo.
    pub async fn share_photo(&mut self, sharer: &mut dyn PhotoSharer) -> CapabilityResult<bool> {
        let Some(photo) = self.photo.as_deref() else {
            debug!("nothing to share");
            return Ok(false);
        };

        sharer.share(photo).await?;
        Ok(true)
    }

    pub fn start_scan(&mut self) {
        self.scanning = true;
        self.qr_data = None;
    }

    pub fn cancel_scan(&mut self) {
        self.scanning = false;
    }

    /// Handles one detected payload.
    ///
    /// Detections that arrive while not scanning are dropped. The first one
    /// accepted ends the scan.
    pub fn on_detect(&mut self, payload: String) -> Option<Notice> {
        if !self.scanning {
            debug!(payload = %payload, "detection ignored, not scanning");
            return None;
        }

        self.scanning = false;
        info!(payload = %payload, "qr detected");
        self.qr_data = Some(payload.clone());
        Some(Notice::QrDetected(payload))
    }

    /// Scans until the source reports a payload.
    ///
    /// If the source closes first, scanning is cancelled and `None` is returned.
    pub async fn scan(&mut self, source: &mut dyn BarcodeSource) -> CapabilityResult<Option<Notice>> {
        self.require_permission()?;
        self.start_scan();

        while let Some(payload) = source.next_detection().await {
            if let Some(notice) = self.on_detect(payload) {
                return Ok(Some(notice));
            }
        }

        self.cancel_scan();
        Ok(None)
    }

    /// The last payload, if it looks like a link.
    pub fn link(&self) -> Option<&str> {
        self.qr_data.as_deref().filter(|data| is_url(data))
    }

    /// Opens the scanned link. Does nothing when the payload is not a link.
    pub async fn open_link(&mut self, opener: &mut dyn UrlOpener) -> Option<Notice> {
        let url = self.link()?;

        match opener.open(url).await {
            Ok(()) => None,
            Err(e) => {
                warn!(%e, "failed to open link");
                Some(Notice::LinkFailed)
            }
        }
    }

    pub fn set_credentials(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.username = username.into();
        self.password = password.into();
    }

    /// Acknowledges the typed credentials. Nothing is checked.
    pub fn login(&self) -> Notice {
        Notice::LoggedIn {
            username: self.username.clone(),
            password_set: !self.password.is_empty(),
        }
    }

    /// Clears everything the user entered or captured. Camera permission is kept.
    pub fn logout(&mut self) -> Notice {
        *self = Self {
            permission: self.permission,
            ..Self::default()
        };
        Notice::LoggedOut
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
