// Shorthand for return Err(MetaError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(MetaError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(MetaError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::MetaError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:literal)) => {
		return Err(crate::error::MetaError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for FileDecodingError::new(Region::Foo, "Message")
//
// Usage:
//
// - decode_err!(Region, Message)
// - decode_err!(Message)
//
// or bail:
//
// - decode_err!(@BAIL Region, Message)
// - decode_err!(@BAIL Message)
macro_rules! decode_err {
	($region:ident, $reason:literal) => {
		Into::<crate::error::MetaError>::into(crate::error::FileDecodingError::new(
			crate::error::Region::$region,
			$reason,
		))
	};
	($reason:literal) => {
		Into::<crate::error::MetaError>::into(crate::error::FileDecodingError::from_description(
			$reason,
		))
	};
	(@BAIL $($region:ident,)? $reason:literal) => {
		return Err(decode_err!($($region,)? $reason))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: All fields are optional, if `STRICT` or `RELAXED` are missing, it will
// 		 fall through to `DEFAULT`. If `DEFAULT` is missing, it will fall through
// 		 to an empty block.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		RELAXED: some_expr,
// 		DEFAULT: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr,)?
		DEFAULT: $default:expr
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			_ => { $default }
		}
	};
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr $(,)?)?
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => {}
		}
	};
}

pub(crate) use {decode_err, err, parse_mode_choice};
