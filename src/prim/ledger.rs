//! Ledger primitives
//!
//! Codecs for the ledger-level types that contracts commonly exchange with
//! host code: hashes, credentials, addresses, output references, asset
//! classes, multi-asset values, validity intervals and output datums.
//!
//! Whole transaction inputs and outputs are not covered; callers needing
//! them can register their own codec under `TxInput`/`TxOutput`.
//!
//! Host-side representations are kept close to the tagged form:
//!
//! | Primitive | Host value |
//! |---|---|
//! | hashes, `TxId` | `Bytes` (hex `String` also accepted on encode) |
//! | `Credential` | `{PubKey: bytes}` or `{Validator: bytes}` |
//! | `StakingCredential` | `{Hash: credential}` or `{Ptr: [int, int, int]}` |
//! | `StakingHash` | `{StakeKey: bytes}` or `{Validator: bytes}` |
//! | `Address` | raw address bytes (header, payment hash, optional staking hash) |
//! | `TxOutputId` | `{txId: bytes, index: int}` |
//! | `AssetClass` | `{mph: bytes, tokenName: bytes}` |
//! | `Value` | `Map(mph -> Map(tokenName -> int))`, or a bare lovelace `Int` |
//! | `TimeRange` | `{start, end, includeStart, includeEnd}`, `Null` bounds are infinite |
//! | `TxOutputDatum` | `Null`/`false` for none, `{Hash: bytes}` or `{Inline: data}` |

use super::{bytes_of_value, Primitive, PrimitiveRegistry};
use crate::cast::CastConfig;
use crate::data::{decode_bool, decode_option, encode_bool, encode_option, UplcData};
use crate::error::{CastError, CastResult};
use crate::value::Value;
use num_bigint::BigInt;

const HASH_28: &[usize] = &[28];
const HASH_32: &[usize] = &[32];
const POLICY: &[usize] = &[0, 28];

const MAX_TOKEN_NAME: usize = 32;

fn check_width(name: &str, widths: &[usize], bytes: Vec<u8>) -> CastResult<Vec<u8>> {
    if widths.contains(&bytes.len()) {
        Ok(bytes)
    } else {
        Err(CastError::invalid_primitive(
            name,
            format!(
                "{}-byte value violated requirement of {:?} bytes",
                bytes.len(),
                widths
            ),
        ))
    }
}

/// Fixed-width hash, encoded as a plain byte-string
#[derive(Debug, Clone, Copy)]
pub struct HashPrimitive {
    name: &'static str,
    widths: &'static [usize],
}

impl HashPrimitive {
    pub const fn new(name: &'static str, widths: &'static [usize]) -> Self {
        Self { name, widths }
    }
}

impl Primitive for HashPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        let bytes = bytes_of_value(self.name, value)?;
        check_width(self.name, self.widths, bytes).map(UplcData::Bytes)
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        let bytes = data.expect_bytes()?.to_vec();
        check_width(self.name, self.widths, bytes).map(Value::Bytes)
    }
}

/// Transaction id, wrapped in a single-field constructor
#[derive(Debug, Clone, Copy, Default)]
pub struct TxIdPrimitive;

impl Primitive for TxIdPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        let bytes = check_width("TxId", HASH_32, bytes_of_value("TxId", value)?)?;
        Ok(UplcData::constr(0, vec![UplcData::Bytes(bytes)]))
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        let fields = data.expect_constr_with(0, 1)?;
        let bytes = check_width("TxId", HASH_32, fields[0].expect_bytes()?.to_vec())?;
        Ok(Value::Bytes(bytes))
    }
}

/// Reference to a transaction output: transaction id plus output index
#[derive(Debug, Clone, Copy, Default)]
pub struct TxOutputIdPrimitive;

impl Primitive for TxOutputIdPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        let tx_id = TxIdPrimitive.encode(value.require_field("txId")?)?;
        let index = value.require_field("index")?.expect_int()?;
        if index.sign() == num_bigint::Sign::Minus {
            return Err(CastError::invalid_primitive(
                "TxOutputId",
                format!("negative output index {index}"),
            ));
        }
        Ok(UplcData::constr(0, vec![tx_id, UplcData::Int(index.clone())]))
    }

    fn decode(&self, data: &UplcData, config: &CastConfig) -> CastResult<Value> {
        let fields = data.expect_constr_with(0, 2)?;
        Ok(Value::record([
            ("txId", TxIdPrimitive.decode(&fields[0], config)?),
            ("index", Value::Int(fields[1].expect_int()?.clone())),
        ]))
    }
}

fn token_name(bytes: Vec<u8>) -> CastResult<Vec<u8>> {
    if bytes.len() > MAX_TOKEN_NAME {
        Err(CastError::invalid_primitive(
            "AssetClass",
            format!(
                "{}-byte token name exceeded limit of {MAX_TOKEN_NAME} bytes",
                bytes.len()
            ),
        ))
    } else {
        Ok(bytes)
    }
}

/// Minting policy plus token name
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetClassPrimitive;

impl Primitive for AssetClassPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        let mph = bytes_of_value("AssetClass", value.require_field("mph")?)?;
        let name = bytes_of_value("AssetClass", value.require_field("tokenName")?)?;
        Ok(UplcData::constr(
            0,
            vec![
                UplcData::Bytes(check_width("MintingPolicyHash", POLICY, mph)?),
                UplcData::Bytes(token_name(name)?),
            ],
        ))
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        let fields = data.expect_constr_with(0, 2)?;
        let mph = check_width("MintingPolicyHash", POLICY, fields[0].expect_bytes()?.to_vec())?;
        let name = token_name(fields[1].expect_bytes()?.to_vec())?;
        Ok(Value::record([
            ("mph", Value::Bytes(mph)),
            ("tokenName", Value::Bytes(name)),
        ]))
    }
}

/// Typed view of a payment or staking credential
#[derive(Debug, Clone, PartialEq, Eq)]
enum Credential {
    PubKey(Vec<u8>),
    Validator(Vec<u8>),
}

impl Credential {
    fn from_value(value: &Value) -> CastResult<Self> {
        let record = value.expect_record()?;
        match record.iter().next() {
            Some((key, hash)) if record.len() == 1 => {
                let bytes = check_width("Credential", HASH_28, bytes_of_value("Credential", hash)?)?;
                match key.as_str() {
                    "PubKey" => Ok(Self::PubKey(bytes)),
                    "Validator" => Ok(Self::Validator(bytes)),
                    other => Err(CastError::invalid_primitive(
                        "Credential",
                        format!("invalid variant {other} (expected: PubKey, Validator)"),
                    )),
                }
            }
            _ => Err(CastError::invalid_primitive(
                "Credential",
                "expected a record with exactly one of PubKey, Validator",
            )),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Self::PubKey(hash) => Value::variant("PubKey", Value::Bytes(hash.clone())),
            Self::Validator(hash) => Value::variant("Validator", Value::Bytes(hash.clone())),
        }
    }

    fn to_data(&self) -> UplcData {
        match self {
            Self::PubKey(hash) => UplcData::constr(0, vec![UplcData::Bytes(hash.clone())]),
            Self::Validator(hash) => UplcData::constr(1, vec![UplcData::Bytes(hash.clone())]),
        }
    }

    fn from_data(data: &UplcData) -> CastResult<Self> {
        let (tag, _) = data.expect_constr()?;
        if tag > 1 {
            return Err(CastError::invalid_primitive(
                "Credential",
                format!("tag {tag} out of range"),
            ));
        }
        let fields = data.expect_constr_with(tag, 1)?;
        let hash = check_width("Credential", HASH_28, fields[0].expect_bytes()?.to_vec())?;
        Ok(if tag == 0 {
            Self::PubKey(hash)
        } else {
            Self::Validator(hash)
        })
    }

    fn is_script(&self) -> bool {
        matches!(self, Self::Validator(_))
    }

    fn hash(&self) -> &[u8] {
        match self {
            Self::PubKey(hash) | Self::Validator(hash) => hash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StakingCredential {
    Hash(Credential),
    Ptr(BigInt, BigInt, BigInt),
}

impl StakingCredential {
    fn from_value(value: &Value) -> CastResult<Self> {
        let record = value.expect_record()?;
        match record.iter().next() {
            Some((key, inner)) if record.len() == 1 => match key.as_str() {
                "Hash" => Ok(Self::Hash(Credential::from_value(inner)?)),
                "Ptr" => match inner.expect_list()? {
                    [a, b, c] => Ok(Self::Ptr(
                        a.expect_int()?.clone(),
                        b.expect_int()?.clone(),
                        c.expect_int()?.clone(),
                    )),
                    items => Err(CastError::arity("items in staking pointer", 3, items.len())),
                },
                other => Err(CastError::invalid_primitive(
                    "StakingCredential",
                    format!("invalid variant {other} (expected: Hash, Ptr)"),
                )),
            },
            _ => Err(CastError::invalid_primitive(
                "StakingCredential",
                "expected a record with exactly one of Hash, Ptr",
            )),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Hash(cred) => Value::variant("Hash", cred.to_value()),
            Self::Ptr(a, b, c) => Value::variant(
                "Ptr",
                Value::List(vec![
                    Value::Int(a.clone()),
                    Value::Int(b.clone()),
                    Value::Int(c.clone()),
                ]),
            ),
        }
    }

    fn to_data(&self) -> UplcData {
        match self {
            Self::Hash(cred) => UplcData::constr(0, vec![cred.to_data()]),
            Self::Ptr(a, b, c) => UplcData::constr(
                1,
                vec![
                    UplcData::Int(a.clone()),
                    UplcData::Int(b.clone()),
                    UplcData::Int(c.clone()),
                ],
            ),
        }
    }

    fn from_data(data: &UplcData) -> CastResult<Self> {
        match data.expect_constr()? {
            (0, [cred]) => Ok(Self::Hash(Credential::from_data(cred)?)),
            (1, [a, b, c]) => Ok(Self::Ptr(
                a.expect_int()?.clone(),
                b.expect_int()?.clone(),
                c.expect_int()?.clone(),
            )),
            (0, fields) => Err(CastError::arity("fields in staking hash", 1, fields.len())),
            (1, fields) => Err(CastError::arity("fields in staking pointer", 3, fields.len())),
            (tag, _) => Err(CastError::invalid_primitive(
                "StakingCredential",
                format!("tag {tag} out of range"),
            )),
        }
    }
}

/// Payment credential, registered as both `Credential` and `SpendingCredential`
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialPrimitive;

impl Primitive for CredentialPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        Credential::from_value(value).map(|cred| cred.to_data())
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        Credential::from_data(data).map(|cred| cred.to_value())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StakingCredentialPrimitive;

impl Primitive for StakingCredentialPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        StakingCredential::from_value(value).map(|cred| cred.to_data())
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        StakingCredential::from_data(data).map(|cred| cred.to_value())
    }
}

/// Hash of a staking key or staking validator
///
/// Same tagged layout as a payment [`Credential`], with the key variant
/// named `StakeKey` on the host side.
#[derive(Debug, Clone, Copy, Default)]
pub struct StakingHashPrimitive;

impl StakingHashPrimitive {
    const KEY: &'static str = "StakeKey";
    const SCRIPT: &'static str = "Validator";
}

impl Primitive for StakingHashPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        let record = value.expect_record()?;
        let (key, hash) = match record.iter().next() {
            Some(entry) if record.len() == 1 => entry,
            _ => {
                return Err(CastError::invalid_primitive(
                    "StakingHash",
                    "expected a record with exactly one of StakeKey, Validator",
                ))
            }
        };
        let hash = check_width("StakingHash", HASH_28, bytes_of_value("StakingHash", hash)?)?;
        let cred = match key.as_str() {
            Self::KEY => Credential::PubKey(hash),
            Self::SCRIPT => Credential::Validator(hash),
            other => {
                return Err(CastError::invalid_primitive(
                    "StakingHash",
                    format!("invalid variant {other} (expected: StakeKey, Validator)"),
                ))
            }
        };
        Ok(cred.to_data())
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        Ok(match Credential::from_data(data)? {
            Credential::PubKey(hash) => Value::variant(Self::KEY, Value::Bytes(hash)),
            Credential::Validator(hash) => Value::variant(Self::SCRIPT, Value::Bytes(hash)),
        })
    }
}

/// Shelley-era base and enterprise addresses
///
/// The tagged form omits the network, so decoding rebuilds the header byte
/// from [`CastConfig::is_mainnet`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressPrimitive;

impl AddressPrimitive {
    const ENTERPRISE: u8 = 0b0110;
    const MAINNET: u8 = 1;
    const TESTNET: u8 = 0;

    fn invalid(reason: impl std::fmt::Display) -> CastError {
        CastError::invalid_primitive("Address", reason)
    }
}

impl Primitive for AddressPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        let bytes = bytes_of_value("Address", value)?;
        let Some(&header) = bytes.first() else {
            return Err(Self::invalid("empty address"));
        };
        let kind = header >> 4;
        let expected_len = match kind {
            0..=3 => 57,
            Self::ENTERPRISE | 0b0111 => 29,
            _ => return Err(Self::invalid(format!("unsupported address type {kind}"))),
        };
        if bytes.len() != expected_len {
            return Err(Self::invalid(format!(
                "{}-byte value violated requirement of {expected_len} bytes",
                bytes.len()
            )));
        }
        let payment_hash = bytes[1..29].to_vec();
        let payment = if kind & 0b01 != 0 {
            Credential::Validator(payment_hash)
        } else {
            Credential::PubKey(payment_hash)
        };
        let staking = if kind <= 3 {
            let staking_hash = bytes[29..57].to_vec();
            let cred = if kind & 0b10 != 0 {
                Credential::Validator(staking_hash)
            } else {
                Credential::PubKey(staking_hash)
            };
            Some(StakingCredential::Hash(cred).to_data())
        } else {
            None
        };
        Ok(UplcData::constr(
            0,
            vec![payment.to_data(), encode_option(staking)],
        ))
    }

    fn decode(&self, data: &UplcData, config: &CastConfig) -> CastResult<Value> {
        let fields = data.expect_constr_with(0, 2)?;
        let payment = Credential::from_data(&fields[0])?;
        let staking = match decode_option(&fields[1])? {
            Some(inner) => match StakingCredential::from_data(inner)? {
                StakingCredential::Hash(cred) => Some(cred),
                StakingCredential::Ptr(..) => {
                    return Err(Self::invalid("pointer addresses are not supported"))
                }
            },
            None => None,
        };
        let network = if config.is_mainnet {
            Self::MAINNET
        } else {
            Self::TESTNET
        };
        let kind = match &staking {
            Some(stake) => u8::from(payment.is_script()) | (u8::from(stake.is_script()) << 1),
            None => Self::ENTERPRISE | u8::from(payment.is_script()),
        };
        let mut bytes = Vec::with_capacity(57);
        bytes.push((kind << 4) | network);
        bytes.extend_from_slice(payment.hash());
        if let Some(stake) = &staking {
            bytes.extend_from_slice(stake.hash());
        }
        Ok(Value::Bytes(bytes))
    }
}

/// Multi-asset value: policy -> token name -> quantity
#[derive(Debug, Clone, Copy, Default)]
pub struct ValuePrimitive;

impl ValuePrimitive {
    fn encode_assets(value: &Value) -> CastResult<UplcData> {
        match value {
            Value::Map(tokens) => tokens
                .iter()
                .map(|(name, qty)| {
                    Ok((
                        UplcData::Bytes(token_name(bytes_of_value("Value", name)?)?),
                        UplcData::Int(qty.expect_int()?.clone()),
                    ))
                })
                .collect::<CastResult<Vec<_>>>()
                .map(UplcData::Map),
            other => Err(CastError::shape("map", other.kind_name())),
        }
    }

    fn decode_assets(data: &UplcData) -> CastResult<Value> {
        data.expect_map()?
            .iter()
            .map(|(name, qty)| {
                Ok((
                    Value::Bytes(token_name(name.expect_bytes()?.to_vec())?),
                    Value::Int(qty.expect_int()?.clone()),
                ))
            })
            .collect::<CastResult<Vec<_>>>()
            .map(Value::Map)
    }
}

impl Primitive for ValuePrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        match value {
            Value::Int(lovelace) => Ok(UplcData::Map(vec![(
                UplcData::Bytes(Vec::new()),
                UplcData::Map(vec![(
                    UplcData::Bytes(Vec::new()),
                    UplcData::Int(lovelace.clone()),
                )]),
            )])),
            Value::Map(policies) => policies
                .iter()
                .map(|(mph, assets)| {
                    let mph = check_width("MintingPolicyHash", POLICY, bytes_of_value("Value", mph)?)?;
                    Ok((UplcData::Bytes(mph), Self::encode_assets(assets)?))
                })
                .collect::<CastResult<Vec<_>>>()
                .map(UplcData::Map),
            other => Err(CastError::shape("map or int", other.kind_name())),
        }
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        data.expect_map()?
            .iter()
            .map(|(mph, assets)| {
                let mph = check_width("MintingPolicyHash", POLICY, mph.expect_bytes()?.to_vec())?;
                Ok((Value::Bytes(mph), Self::decode_assets(assets)?))
            })
            .collect::<CastResult<Vec<_>>>()
            .map(Value::Map)
    }
}

/// Validity interval between two (possibly infinite) bounds
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeRangePrimitive;

impl TimeRangePrimitive {
    const NEG_INF: u64 = 0;
    const FINITE: u64 = 1;
    const POS_INF: u64 = 2;

    fn encode_bound(time: &Value, infinite: u64, closed: bool) -> CastResult<UplcData> {
        let extended = match time {
            Value::Null => UplcData::constr(infinite, Vec::new()),
            other => UplcData::constr(Self::FINITE, vec![UplcData::Int(other.expect_int()?.clone())]),
        };
        Ok(UplcData::constr(0, vec![extended, encode_bool(closed)]))
    }

    fn decode_bound(data: &UplcData, infinite: u64) -> CastResult<(Value, bool)> {
        let fields = data.expect_constr_with(0, 2)?;
        let closed = decode_bool(&fields[1])?;
        let time = match fields[0].expect_constr()? {
            (Self::FINITE, [time]) => Value::Int(time.expect_int()?.clone()),
            (tag, []) if tag == infinite => Value::Null,
            (tag, _) => {
                return Err(CastError::invalid_primitive(
                    "TimeRange",
                    format!("unexpected bound with tag {tag}"),
                ))
            }
        };
        Ok((time, closed))
    }

    fn flag(value: &Value, field: &str) -> CastResult<bool> {
        match value.get(field) {
            None => Ok(true),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(CastError::shape("bool", other.kind_name())),
        }
    }
}

impl Primitive for TimeRangePrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        let lower = Self::encode_bound(
            value.require_field("start")?,
            Self::NEG_INF,
            Self::flag(value, "includeStart")?,
        )?;
        let upper = Self::encode_bound(
            value.require_field("end")?,
            Self::POS_INF,
            Self::flag(value, "includeEnd")?,
        )?;
        Ok(UplcData::constr(0, vec![lower, upper]))
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        let fields = data.expect_constr_with(0, 2)?;
        let (start, include_start) = Self::decode_bound(&fields[0], Self::NEG_INF)?;
        let (end, include_end) = Self::decode_bound(&fields[1], Self::POS_INF)?;
        Ok(Value::record([
            ("start", start),
            ("end", end),
            ("includeStart", Value::Bool(include_start)),
            ("includeEnd", Value::Bool(include_end)),
        ]))
    }
}

/// Datum attached to a transaction output: none, a datum hash, or inline data
#[derive(Debug, Clone, Copy, Default)]
pub struct TxOutputDatumPrimitive;

impl TxOutputDatumPrimitive {
    const NONE: u64 = 0;
    const HASH: u64 = 1;
    const INLINE: u64 = 2;

    fn invalid(reason: impl std::fmt::Display) -> CastError {
        CastError::invalid_primitive("TxOutputDatum", reason)
    }
}

impl Primitive for TxOutputDatumPrimitive {
    fn encode(&self, value: &Value) -> CastResult<UplcData> {
        if value.is_null() || matches!(value, Value::Bool(false)) {
            return Ok(UplcData::constr(Self::NONE, Vec::new()));
        }
        let record = value.expect_record()?;
        match record.iter().next() {
            Some((key, inner)) if record.len() == 1 => match key.as_str() {
                "Hash" => {
                    let hash = check_width("DatumHash", HASH_32, bytes_of_value("DatumHash", inner)?)?;
                    Ok(UplcData::constr(Self::HASH, vec![UplcData::Bytes(hash)]))
                }
                "Inline" => match inner {
                    Value::Data(data) => Ok(UplcData::constr(Self::INLINE, vec![data.clone()])),
                    other => Err(CastError::shape("data", other.kind_name())),
                },
                other => Err(Self::invalid(format!(
                    "invalid variant {other} (expected: Hash, Inline)"
                ))),
            },
            _ => Err(Self::invalid("expected a record with exactly one of Hash, Inline")),
        }
    }

    fn decode(&self, data: &UplcData, _: &CastConfig) -> CastResult<Value> {
        match data.expect_constr()? {
            (Self::NONE, []) => Ok(Value::Null),
            (Self::HASH, [hash]) => {
                let hash = check_width("DatumHash", HASH_32, hash.expect_bytes()?.to_vec())?;
                Ok(Value::variant("Hash", Value::Bytes(hash)))
            }
            (Self::INLINE, [inline]) => Ok(Value::variant("Inline", Value::Data(inline.clone()))),
            (Self::NONE, fields) => Err(CastError::arity("fields in empty datum", 0, fields.len())),
            (Self::HASH | Self::INLINE, fields) => {
                Err(CastError::arity("fields in output datum", 1, fields.len()))
            }
            (tag, _) => Err(Self::invalid(format!("tag {tag} out of range"))),
        }
    }
}

pub(super) fn register_all(reg: &mut PrimitiveRegistry) {
    reg.register("Address", AddressPrimitive)
        .register("AssetClass", AssetClassPrimitive)
        .register("Credential", CredentialPrimitive)
        .register("SpendingCredential", CredentialPrimitive)
        .register("StakingCredential", StakingCredentialPrimitive)
        .register("StakingHash", StakingHashPrimitive)
        .register("DatumHash", HashPrimitive::new("DatumHash", HASH_32))
        .register(
            "MintingPolicyHash",
            HashPrimitive::new("MintingPolicyHash", POLICY),
        )
        .register("PubKey", HashPrimitive::new("PubKey", HASH_32))
        .register("PubKeyHash", HashPrimitive::new("PubKeyHash", HASH_28))
        .register("ScriptHash", HashPrimitive::new("ScriptHash", HASH_28))
        .register(
            "StakingValidatorHash",
            HashPrimitive::new("StakingValidatorHash", HASH_28),
        )
        .register("ValidatorHash", HashPrimitive::new("ValidatorHash", HASH_28))
        .register("TimeRange", TimeRangePrimitive)
        .register("TxId", TxIdPrimitive)
        .register("TxOutputDatum", TxOutputDatumPrimitive)
        .register("TxOutputId", TxOutputIdPrimitive)
        .register("Value", ValuePrimitive);
}
