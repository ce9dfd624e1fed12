/*!
# Flagpole: Networks.
*/

use std::{
	fmt,
	net::{
		IpAddr,
		Ipv4Addr,
		Ipv6Addr,
	},
	str::FromStr,
};
use super::ValueError;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # IP Network.
///
/// An address and prefix length in CIDR notation, e.g. `10.0.0.0/8`. The
/// host bits are zeroed during parsing, so `10.1.2.3/8` and `10.0.0.0/8`
/// are the same network.
pub struct IpNet {
	/// # Network Address.
	addr: IpAddr,

	/// # Prefix Length.
	prefix: u8,
}

impl fmt::Display for IpNet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.addr, self.prefix)
	}
}

impl FromStr for IpNet {
	type Err = ValueError;

	fn from_str(src: &str) -> Result<Self, Self::Err> {
		let syntax = || ValueError::Syntax { kind: "ipNet", raw: src.to_owned() };

		let (addr, prefix) = src.split_once('/').ok_or_else(syntax)?;
		let addr = addr.parse::<IpAddr>().map_err(|_| syntax())?;
		if prefix.is_empty() || ! prefix.bytes().all(|b| b.is_ascii_digit()) {
			return Err(syntax());
		}
		let prefix = prefix.parse::<u8>().map_err(|_| syntax())?;

		Self::new(addr, prefix).ok_or_else(syntax)
	}
}

impl IpNet {
	#[must_use]
	/// # New.
	///
	/// Returns `None` if the prefix is too long for the address family.
	///
	/// ## Examples
	///
	/// ```
	/// use flagpole::value::IpNet;
	/// use std::net::IpAddr;
	///
	/// let net = IpNet::new(IpAddr::from([192, 168, 7, 9]), 16).unwrap();
	/// assert_eq!(net.to_string(), "192.168.0.0/16");
	///
	/// assert!(IpNet::new(IpAddr::from([192, 168, 7, 9]), 33).is_none());
	/// ```
	pub fn new(addr: IpAddr, prefix: u8) -> Option<Self> {
		let addr = match addr {
			IpAddr::V4(a) => {
				if prefix > 32 { return None; }
				let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
				IpAddr::V4(Ipv4Addr::from(u32::from(a) & mask))
			},
			IpAddr::V6(a) => {
				if prefix > 128 { return None; }
				let mask = u128::MAX.checked_shl(128 - u32::from(prefix)).unwrap_or(0);
				IpAddr::V6(Ipv6Addr::from(u128::from(a) & mask))
			},
		};
		Some(Self { addr, prefix })
	}

	#[must_use]
	/// # Network Address.
	pub const fn addr(&self) -> IpAddr { self.addr }

	#[must_use]
	/// # Prefix Length.
	pub const fn prefix(&self) -> u8 { self.prefix }

	#[must_use]
	/// # Contains?
	///
	/// Returns `true` if the address falls within this network.
	pub fn contains(&self, ip: IpAddr) -> bool {
		Self::new(ip, self.prefix).is_some_and(|n| n.addr == self.addr)
	}
}
