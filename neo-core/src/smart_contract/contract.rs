//! Account contracts.

use crate::error::{CoreError, CoreResult};
use neo_primitives::{ContractParameterType, UInt160};
use neo_vm::{OpCode, ScriptBuilder, Syscall};

const PUBLIC_KEY_SIZE: usize = 33;
const SIGNATURE_SIZE: usize = 64;

/// A verification script together with the parameters it expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    /// The verification script of the contract.
    pub script: Vec<u8>,

    /// The parameters of the contract.
    pub parameter_list: Vec<ContractParameterType>,
}

impl Contract {
    /// Creates a contract from a script and its parameters.
    pub fn create(parameter_list: Vec<ContractParameterType>, script: Vec<u8>) -> Self {
        Self {
            script,
            parameter_list,
        }
    }

    /// Creates the standard single-signature contract for a compressed public key.
    pub fn create_signature_contract(public_key: &[u8]) -> CoreResult<Self> {
        Ok(Self::create(
            vec![ContractParameterType::Signature],
            Self::create_signature_redeem_script(public_key)?,
        ))
    }

    /// Builds `PUSHDATA1 <pubkey> SYSCALL System.Crypto.CheckSig`.
    pub fn create_signature_redeem_script(public_key: &[u8]) -> CoreResult<Vec<u8>> {
        if public_key.len() != PUBLIC_KEY_SIZE || !matches!(public_key[0], 0x02 | 0x03) {
            return Err(CoreError::invalid_format(format!(
                "expected a {PUBLIC_KEY_SIZE}-byte compressed public key"
            )));
        }
        let mut builder = ScriptBuilder::new();
        builder
            .emit_push(public_key)
            .emit_interop(Syscall::CryptoCheckSig);
        Ok(builder.into_bytes())
    }

    /// Builds the invocation script that feeds `signature` to a signature contract.
    pub fn create_signature_invocation_script(signature: &[u8]) -> CoreResult<Vec<u8>> {
        if signature.len() != SIGNATURE_SIZE {
            return Err(CoreError::invalid_format(format!(
                "expected a {SIGNATURE_SIZE}-byte signature, got {}",
                signature.len()
            )));
        }
        let mut builder = ScriptBuilder::new();
        builder.emit_push(signature);
        Ok(builder.into_bytes())
    }

    /// Checks whether `script` is a standard single-signature verification script.
    pub fn is_signature_contract(script: &[u8]) -> bool {
        script.len() == 40
            && script[0] == OpCode::PUSHDATA1 as u8
            && script[1] == PUBLIC_KEY_SIZE as u8
            && script[35] == OpCode::SYSCALL as u8
            && script[36..40] == Syscall::CryptoCheckSig.hash().to_le_bytes()
    }

    /// The account (script hash) of this contract.
    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_crypto::KeyPair;

    fn public_key() -> [u8; 33] {
        let mut private_key = [0u8; 32];
        private_key[31] = 1;
        KeyPair::from_private_key(&private_key)
            .unwrap()
            .public_key()
    }

    #[test]
    fn redeem_script_layout() {
        let key = public_key();
        let script = Contract::create_signature_redeem_script(&key).unwrap();
        assert_eq!(script.len(), 40);
        assert_eq!(&script[..2], &[0x0C, 0x21]);
        assert_eq!(&script[2..35], &key);
        assert_eq!(hex::encode(&script[35..]), "4156e7b327");
        assert!(Contract::is_signature_contract(&script));
    }

    #[test]
    fn signature_contract_hash() {
        let key = public_key();
        let contract = Contract::create_signature_contract(&key).unwrap();
        assert_eq!(contract.parameter_list, vec![ContractParameterType::Signature]);
        assert_eq!(
            contract.script_hash(),
            UInt160::from_script(&contract.script)
        );
    }

    #[test]
    fn rejects_uncompressed_keys() {
        assert!(Contract::create_signature_redeem_script(&[0x04; 33]).is_err());
        assert!(Contract::create_signature_redeem_script(&[0x02; 32]).is_err());
    }

    #[test]
    fn invocation_script_layout() {
        let script = Contract::create_signature_invocation_script(&[0xAB; 64]).unwrap();
        assert_eq!(script.len(), 66);
        assert_eq!(&script[..2], &[0x0C, 0x40]);
        assert!(Contract::create_signature_invocation_script(&[0; 63]).is_err());
    }

    #[test]
    fn is_signature_contract_rejects_other_scripts() {
        assert!(!Contract::is_signature_contract(&[0x40]));
        let mut script = Contract::create_signature_redeem_script(&public_key()).unwrap();
        script[36] ^= 0xFF;
        assert!(!Contract::is_signature_contract(&script));
    }
}
