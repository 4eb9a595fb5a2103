use thiserror::Error;

/// Outcome of a JWT/JWKS verification step.
///
/// One variant per distinguishable outcome: the single success state
/// [`Status::Ok`] plus every failure a token parser, key-set parser, key
/// builder, or signature verifier can detect. A producer selects the
/// variant that most specifically describes what it found and returns it;
/// failures are never combined, the first detected one wins and later
/// checks are skipped.
///
/// The set is closed on purpose — no `#[non_exhaustive]` — so downstream
/// matches stay compiler-checked and a new failure cause is always a new
/// variant rather than a reuse of an existing one.
///
/// `Display` renders each variant as a fixed English message. Messages
/// never contain token content or field values, so they are safe to log.
///
/// ```
/// use tokenvet::Status;
///
/// assert_eq!(Status::Ok.to_string(), "OK");
/// assert_eq!(Status::JwtExpired.to_string(), "Jwt is expired");
/// ```
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug, Error, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Status {
    /// Verification completed with no error
    #[default]
    #[error("OK")]
    Ok,

    /// Status raised when no Jwt is present to verify
    #[error("Jwt is missing")]
    JwtMissed,

    /// Status raised when the `nbf` claim places the Jwt in the future
    #[error("Jwt not yet valid")]
    JwtNotYetValid,

    /// Status raised when the `exp` claim places the Jwt in the past
    #[error("Jwt is expired")]
    JwtExpired,

    /// Status raised when the token does not split into three dot-delimited sections
    #[error("Jwt is not in the form of Header.Payload.Signature")]
    JwtBadFormat,

    /// Status raised when the header section cannot be decoded or parsed
    #[error("Jwt header is an invalid Base64url input or an invalid JSON")]
    JwtHeaderParseError,

    /// Status raised when the header `alg` field is present but not a string
    #[error("Jwt header [alg] field is not a string")]
    JwtHeaderBadAlg,

    /// Status raised when the header `alg` field names no known algorithm
    #[error("Jwt header [alg] field value is invalid")]
    JwtHeaderNotImplementedAlg,

    /// Status raised when the header `kid` field is present but not a string
    #[error("Jwt header [kid] field is not a string")]
    JwtHeaderBadKid,

    /// Status raised when the payload section cannot be decoded or parsed
    #[error("Jwt payload is an invalid Base64 or an invalid JSON")]
    JwtPayloadParseError,

    /// Status raised when the signature section is not valid Base64
    #[error("Jwt signature is an invalid Base64")]
    JwtSignatureParseError,

    /// Status raised when the `iss` claim matches no configured issuer
    #[error("Jwt issuer is not configured")]
    JwtUnknownIssuer,

    /// Status raised when no `aud` claim entry is in the allowed set
    #[error("Audiences in Jwt are not allowed")]
    JwtAudienceNotAllowed,

    /// Status raised when the signature does not verify against any candidate key
    #[error("Jwt verification fails")]
    JwtVerificationFail,

    /// Status raised when the Jwks document is not valid JSON
    #[error("Jwks is an invalid JSON")]
    JwksParseError,

    /// Status raised when the Jwks document has no `keys` field
    #[error("Jwks does not have [keys] field")]
    JwksNoKeys,

    /// Status raised when the Jwks `keys` field is not an array
    #[error("[keys] in Jwks is not an array")]
    JwksBadKeys,

    /// Status raised when no entry of the Jwks yields a usable public key
    #[error("Jwks doesn't have any valid public key")]
    JwksNoValidKeys,

    /// Status raised when no Jwks key matches the token's `kid` or `alg`
    #[error("Jwks doesn't have key to match kid or alg from Jwt")]
    JwksKidAlgMismatch,

    /// Status raised when a PEM-wrapped public key is not valid Base64
    #[error("Jwks PEM public key is an invalid Base64")]
    JwksPemBadBase64,

    /// Status raised when a PEM-wrapped public key fails to parse
    #[error("Jwks PEM public key parse error")]
    JwksPemParseError,

    /// Status raised when the RSA modulus or exponent cannot be extracted
    #[error("Jwks RSA [n] or [e] field is missing or has a parse error")]
    JwksRsaParseError,

    /// Status raised when the backend cannot construct an EC key object
    #[error("Jwks EC create key fail")]
    JwksEcCreateKeyFail,

    /// Status raised when an EC coordinate is not valid Base64
    #[error("Jwks EC [x] or [y] field is an invalid Base64.")]
    JwksEcXorYBadBase64,

    /// Status raised when decoded EC coordinates do not form a curve point
    #[error("Jwks EC [x] and [y] fields have a parse error.")]
    JwksEcParseError,

    /// Status raised when an `oct` key's `k` value is not valid Base64
    #[error("Jwks Oct key is an invalid Base64")]
    JwksOctBadBase64,

    /// Status raised when fetching a remote Jwks document fails
    #[error("Jwks remote fetch is failed")]
    JwksFetchFail,

    /// Status raised when a Jwks entry has no `kty` field
    #[error("[kty] is missing in [keys]")]
    JwksMissingKty,

    /// Status raised when a Jwks entry's `kty` field is not a string
    #[error("[kty] is bad in [keys]")]
    JwksBadKty,

    /// Status raised when a Jwks entry's `kty` names an unsupported key type
    #[error("[kty] is not supported in [keys]")]
    JwksNotImplementedKty,

    /// Status raised when an RSA key's `alg` is not an RS-family algorithm
    #[error("[alg] is not started with [RS] for a RSA key")]
    JwksRSAKeyBadAlg,

    /// Status raised when an RSA key has no `n` field
    #[error("[n] field is missing for a RSA key")]
    JwksRSAKeyMissingN,

    /// Status raised when an RSA key's `n` field is not a string
    #[error("[n] field is not string for a RSA key")]
    JwksRSAKeyBadN,

    /// Status raised when an RSA key has no `e` field
    #[error("[e] field is missing for a RSA key")]
    JwksRSAKeyMissingE,

    /// Status raised when an RSA key's `e` field is not a string
    #[error("[e] field is not string for a RSA key")]
    JwksRSAKeyBadE,

    /// Status raised when an EC key's `alg` is not an ES-family algorithm
    #[error("[alg] is not started with [ES] for an EC key")]
    JwksECKeyBadAlg,

    /// Status raised when an EC key's `crv` field is not a string
    #[error("[crv] field is not string for an EC key")]
    JwksECKeyBadCrv,

    /// Status raised when neither `crv` nor `alg` identifies a supported curve
    #[error("[crv] or [alg] field is not supported for an EC key")]
    JwksECKeyAlgOrCrvUnsupported,

    /// Status raised when the named curve and algorithm disagree
    #[error("[crv] field specified is not compatible with [alg] for an EC key")]
    JwksECKeyAlgNotCompatibleWithCrv,

    /// Status raised when an EC key has no `x` field
    #[error("[x] field is missing for an EC key")]
    JwksECKeyMissingX,

    /// Status raised when an EC key's `x` field is not a string
    #[error("[x] field is not string for an EC key")]
    JwksECKeyBadX,

    /// Status raised when an EC key has no `y` field
    #[error("[y] field is missing for an EC key")]
    JwksECKeyMissingY,

    /// Status raised when an EC key's `y` field is not a string
    #[error("[y] field is not string for an EC key")]
    JwksECKeyBadY,

    /// Status raised when an HMAC key's `alg` is not an HS-family algorithm
    #[error("[alg] does not start with [HS] for an HMAC key")]
    JwksHMACKeyBadAlg,

    /// Status raised when an HMAC key has no `k` field
    #[error("[k] field is missing for an HMAC key")]
    JwksHMACKeyMissingK,

    /// Status raised when an HMAC key's `k` field is not a string
    #[error("[k] field is not string for an HMAC key")]
    JwksHMACKeyBadK,

    /// Status raised when writing X509 data into a memory buffer fails
    #[error("X509 parse pubkey internal fails: memory allocation")]
    JwksX509BioWriteError,

    /// Status raised when an X509 certificate fails to parse
    #[error("X509 parse pubkey fails")]
    JwksX509ParseError,

    /// Status raised when no public key can be extracted from an X509 certificate
    #[error("X509 parse pubkey internal fails: get pubkey")]
    JwksX509GetPubkeyError,

    /// Status raised when a PKCS8 document holds an unsupported key type
    #[error("PKCS8 Key type is not supported")]
    Pkcs8NotImplementedKty,

    /// Status raised when a PKCS8 public key fails to parse
    #[error("PKCS8 pubkey parse fails")]
    Pkcs8PemParseError,

    /// Status raised when allocating a BIO-style key-material buffer fails
    #[error("Failed to create BIO due to memory allocation failure")]
    BioAllocError,
}

impl Status {
    /// Returns `true` only for [`Status::Ok`].
    ///
    /// Convenience for callers that branch on success without matching
    /// the full variant set.
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}
