use steel::*;
use crate::consts::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum InstructionType {
    Unknown = 0,

    InitializeIx,
    SetParamsIx,

    PayWithLamportsIx,
    PayWithTokensIx,
}

instruction!(InstructionType, InitializeIx);
instruction!(InstructionType, SetParamsIx);
instruction!(InstructionType, PayWithLamportsIx);
instruction!(InstructionType, PayWithTokensIx);

#[derive(Debug)]
pub struct ParsedInitializeIx {
    pub bump: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct InitializeIx {
    pub bump: u8,
}

impl InitializeIx {
    pub fn from_struct(parsed: ParsedInitializeIx) -> Self {
        Self {
            bump: parsed.bump,
        }
    }

    pub fn to_struct(&self) -> ParsedInitializeIx {
        ParsedInitializeIx {
            bump: self.bump,
        }
    }
}

/// Partial update of the payment storage. `None` leaves the field as it is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedSetParamsIx {
    pub price_lamports: Option<u64>,
    pub price_tokens: Option<u64>,
    pub count: Option<u16>,
    pub max_count: Option<u16>,
    pub beneficiary: Option<Pubkey>,
    pub beneficiary_token: Option<Pubkey>,
    pub new_authority: Option<Pubkey>,
}

impl ParsedSetParamsIx {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetParamsIx {
    pub mask: u8,                  // SET_* bits, one per provided field
    pub price_lamports: [u8; 8],
    pub price_tokens: [u8; 8],
    pub count: [u8; 2],
    pub max_count: [u8; 2],
    pub beneficiary: Pubkey,
    pub beneficiary_token: Pubkey,
    pub new_authority: Pubkey,
}

impl SetParamsIx {
    pub fn from_struct(parsed: ParsedSetParamsIx) -> Self {
        let mut mask = 0u8;
        let mut flag = |value: bool, bit: u8| if value { mask |= bit };

        flag(parsed.price_lamports.is_some(), SET_PRICE_LAMPORTS);
        flag(parsed.price_tokens.is_some(), SET_PRICE_TOKENS);
        flag(parsed.count.is_some(), SET_COUNT);
        flag(parsed.max_count.is_some(), SET_MAX_COUNT);
        flag(parsed.beneficiary.is_some(), SET_BENEFICIARY);
        flag(parsed.beneficiary_token.is_some(), SET_BENEFICIARY_TOKEN);
        flag(parsed.new_authority.is_some(), SET_AUTHORITY);

        Self {
            mask,
            price_lamports: parsed.price_lamports.unwrap_or_default().to_le_bytes(),
            price_tokens: parsed.price_tokens.unwrap_or_default().to_le_bytes(),
            count: parsed.count.unwrap_or_default().to_le_bytes(),
            max_count: parsed.max_count.unwrap_or_default().to_le_bytes(),
            beneficiary: parsed.beneficiary.unwrap_or_default(),
            beneficiary_token: parsed.beneficiary_token.unwrap_or_default(),
            new_authority: parsed.new_authority.unwrap_or_default(),
        }
    }

    pub fn to_struct(&self) -> Result<ParsedSetParamsIx, ProgramError> {
        if self.mask & !SET_PARAMS_ALL != 0 {
            return Err(ProgramError::InvalidInstructionData);
        }

        let has = |bit: u8| self.mask & bit != 0;

        Ok(ParsedSetParamsIx {
            price_lamports: has(SET_PRICE_LAMPORTS).then(|| u64::from_le_bytes(self.price_lamports)),
            price_tokens: has(SET_PRICE_TOKENS).then(|| u64::from_le_bytes(self.price_tokens)),
            count: has(SET_COUNT).then(|| u16::from_le_bytes(self.count)),
            max_count: has(SET_MAX_COUNT).then(|| u16::from_le_bytes(self.max_count)),
            beneficiary: has(SET_BENEFICIARY).then_some(self.beneficiary),
            beneficiary_token: has(SET_BENEFICIARY_TOKEN).then_some(self.beneficiary_token),
            new_authority: has(SET_AUTHORITY).then_some(self.new_authority),
        })
    }
}

// The price is read from the payment storage, so neither payment carries
// an amount.

#[derive(Debug)]
pub struct ParsedPayWithLamportsIx {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PayWithLamportsIx {}

impl PayWithLamportsIx {
    pub fn from_struct(_parsed: ParsedPayWithLamportsIx) -> Self {
        Self {}
    }

    pub fn to_struct(&self) -> ParsedPayWithLamportsIx {
        ParsedPayWithLamportsIx {}
    }
}

#[derive(Debug)]
pub struct ParsedPayWithTokensIx {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PayWithTokensIx {}

impl PayWithTokensIx {
    pub fn from_struct(_parsed: ParsedPayWithTokensIx) -> Self {
        Self {}
    }

    pub fn to_struct(&self) -> ParsedPayWithTokensIx {
        ParsedPayWithTokensIx {}
    }
}
