//! User-agent classification for choosing a connection path.
//!
//! Mobile browsers cannot host wallet extensions and go through a remote
//! session instead; desktop Chromium browsers can install the extension.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static MOBILE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)android|webos|iphone|ipad|ipod|blackberry|iemobile|opera mini|mobile safari").expect("valid mobile regex")
});

static CHROME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Chrome/\d+").expect("valid chrome regex"));

static CHROMIUM_FORKS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"Edg/|EdgA/|OPR/|SamsungBrowser/|YaBrowser/|Whale/").expect("valid fork regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAgentClass {
	Mobile,
	/// Desktop Google Chrome.
	DesktopChrome,
	/// Desktop Chromium derivative (Edge, Opera, ...). Accepts Chrome extensions.
	DesktopChromium,
	DesktopOther,
}

impl UserAgentClass {
	/// Whether the browser can run a Chrome Web Store extension.
	pub fn supports_chrome_extensions(self) -> bool {
		matches!(self, Self::DesktopChrome | Self::DesktopChromium)
	}
}

pub fn is_mobile(user_agent: &str) -> bool {
	MOBILE.is_match(user_agent)
}

pub fn is_desktop_chrome(user_agent: &str) -> bool {
	classify(user_agent) == UserAgentClass::DesktopChrome
}

pub fn classify(user_agent: &str) -> UserAgentClass {
	if is_mobile(user_agent) {
		UserAgentClass::Mobile
	} else if !CHROME.is_match(user_agent) {
		UserAgentClass::DesktopOther
	} else if CHROMIUM_FORKS.is_match(user_agent) {
		UserAgentClass::DesktopChromium
	} else {
		UserAgentClass::DesktopChrome
	}
}
