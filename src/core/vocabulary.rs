//! The table of known error names, indexed by error number.
//!
//! Error numbers are platform-specific and sparse, so the table is a vector of
//! optional names: an index either holds a name or is a hole. Index 0 means
//! "no error" and is never a valid entry.

use std::io;

use tracing::debug;

/// Builds a `(code, "NAME")` list from libc errno constants.
macro_rules! errno_names {
    ($($name:ident),* $(,)?) => {
        &[$((libc::$name, stringify!($name))),*]
    };
}

/// Names every unix target defines.
#[cfg(unix)]
const POSIX_NAMES: &[(libc::c_int, &str)] = errno_names![
    EPERM, ENOENT, ESRCH, EINTR, EIO, ENXIO, E2BIG, ENOEXEC, EBADF, ECHILD,
    EAGAIN, ENOMEM, EACCES, EFAULT, ENOTBLK, EBUSY, EEXIST, EXDEV, ENODEV,
    ENOTDIR, EISDIR, EINVAL, ENFILE, EMFILE, ENOTTY, ETXTBSY, EFBIG, ENOSPC,
    ESPIPE, EROFS, EMLINK, EPIPE, EDOM, ERANGE, EDEADLK, ENAMETOOLONG, ENOLCK,
    ENOSYS, ENOTEMPTY, ELOOP, ENOMSG, EIDRM, EREMOTE, ENOLINK, EPROTO,
    EMULTIHOP, EBADMSG, EOVERFLOW, EILSEQ, EUSERS, ENOTSOCK, EDESTADDRREQ,
    EMSGSIZE, EPROTOTYPE, ENOPROTOOPT, EPROTONOSUPPORT, ESOCKTNOSUPPORT,
    EOPNOTSUPP, EPFNOSUPPORT, EAFNOSUPPORT, EADDRINUSE, EADDRNOTAVAIL,
    ENETDOWN, ENETUNREACH, ENETRESET, ECONNABORTED, ECONNRESET, ENOBUFS,
    EISCONN, ENOTCONN, ESHUTDOWN, ETOOMANYREFS, ETIMEDOUT, ECONNREFUSED,
    EHOSTDOWN, EHOSTUNREACH, EALREADY, EINPROGRESS, ESTALE, EDQUOT, ECANCELED,
];

#[cfg(not(unix))]
const POSIX_NAMES: &[(libc::c_int, &str)] = &[];

/// Names only Linux defines.
#[cfg(target_os = "linux")]
const LINUX_NAMES: &[(libc::c_int, &str)] = errno_names![
    ECHRNG, EL2NSYNC, EL3HLT, EL3RST, ELNRNG, EUNATCH, ENOCSI, EL2HLT, EBADE,
    EBADR, EXFULL, ENOANO, EBADRQC, EBADSLT, EBFONT, ENOSTR, ENODATA, ETIME,
    ENOSR, ENONET, ENOPKG, EADV, ESRMNT, ECOMM, EDOTDOT, ENOTUNIQ, EBADFD,
    EREMCHG, ELIBACC, ELIBBAD, ELIBSCN, ELIBMAX, ELIBEXEC, ERESTART, ESTRPIPE,
    EUCLEAN, ENOTNAM, ENAVAIL, EISNAM, EREMOTEIO, ENOMEDIUM, EMEDIUMTYPE,
    ENOKEY, EKEYEXPIRED, EKEYREVOKED, EKEYREJECTED, EOWNERDEAD,
    ENOTRECOVERABLE, ERFKILL, EHWPOISON,
];

#[cfg(not(target_os = "linux"))]
const LINUX_NAMES: &[(libc::c_int, &str)] = &[];

/// Error names indexed by error number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    names: Vec<Option<&'static str>>,
}

impl Vocabulary {
    /// The vocabulary of the platform this binary was built for.
    pub fn platform() -> Self {
        let entries = POSIX_NAMES
            .iter()
            .chain(LINUX_NAMES)
            .filter_map(|&(code, name)| usize::try_from(code).ok().map(|code| (code, name)));
        Self::from_entries(entries)
    }

    /// Build a vocabulary from `(code, name)` pairs.
    ///
    /// Code 0 is reserved and dropped. When two names share a code the first
    /// one is kept.
    pub fn from_entries(entries: impl IntoIterator<Item = (usize, &'static str)>) -> Self {
        let mut names: Vec<Option<&'static str>> = vec![None];

        for (code, name) in entries {
            if code == 0 || name.is_empty() {
                continue;
            }
            if code >= names.len() {
                names.resize(code + 1, None);
            }
            if let Some(existing) = names[code] {
                debug!(code, existing, alias = name, "skipping errno alias");
                continue;
            }
            names[code] = Some(name);
        }

        Self { names }
    }

    /// Number of addressable indices, holes included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the vocabulary has no addressable codes beyond the reserved one.
    pub fn is_empty(&self) -> bool {
        self.names.len() <= 1
    }

    /// The name stored at `code`, if any.
    pub fn name(&self, code: usize) -> Option<&'static str> {
        if code == 0 {
            return None;
        }
        self.names.get(code).copied().flatten()
    }

    /// The code whose name equals `name` exactly (case-sensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.iter_present()
            .find(|(_, candidate)| *candidate == name)
            .map(|(code, _)| code)
    }

    /// Present entries in ascending code order, skipping index 0 and holes.
    pub fn iter_present(&self) -> impl Iterator<Item = (usize, &'static str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(code, name)| name.map(|name| (code, name)))
    }

    /// The platform description for `code`, or `None` if the OS does not
    /// know it.
    pub fn describe(&self, code: usize) -> Option<String> {
        describe(code)
    }
}

/// The OS description text for an error number.
///
/// Uses the message the standard library reports for a raw OS error, without
/// its trailing `(os error N)`.
pub fn describe(code: usize) -> Option<String> {
    let raw = i32::try_from(code).ok()?;
    let message = io::Error::from_raw_os_error(raw).to_string();
    let text = match message.rfind(" (os error ") {
        Some(end) => &message[..end],
        None => message.as_str(),
    };

    if text.is_empty() || text.starts_with("Unknown error") || text == "No error information" {
        None
    } else {
        Some(text.to_string())
    }
}
