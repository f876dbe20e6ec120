// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_manager.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{ContractClientError, ContractClientResult, SignedTransaction};
use neo_core::{Contract, Transaction, Witness};
use neo_crypto::KeyPair;
use neo_primitives::UInt160;
use tracing::debug;

/// An unsigned transaction draft with one witness slot per signer.
///
/// Every operation returns a new draft; an existing draft never changes.
/// Fees and validity are fixed when the draft is made, so signatures stay
/// valid once added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionManager {
    /// The transaction managed by this draft, without witnesses
    tx: Transaction,

    /// Network magic mixed into the signed data
    network: u32,

    /// Witness slots in signer order
    witnesses: Vec<Option<Witness>>,
}

impl TransactionManager {
    /// Wraps a transaction whose fees and validity are already set.
    pub(crate) fn new(tx: Transaction, network: u32) -> Self {
        let witnesses = vec![None; tx.signers().len()];
        Self {
            tx,
            network,
            witnesses,
        }
    }

    /// Get the managed transaction
    pub const fn tx(&self) -> &Transaction {
        &self.tx
    }

    pub const fn network(&self) -> u32 {
        self.network
    }

    /// The witness collected for `account`, if any.
    pub fn witness(&self, account: &UInt160) -> Option<&Witness> {
        self.tx
            .signers()
            .iter()
            .position(|signer| signer.account == *account)
            .and_then(|index| self.witnesses[index].as_ref())
    }

    /// Signer accounts that still have no witness, in signer order.
    pub fn missing_signers(&self) -> Vec<UInt160> {
        self.tx
            .signers()
            .iter()
            .zip(&self.witnesses)
            .filter(|(_, witness)| witness.is_none())
            .map(|(signer, _)| signer.account)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.witnesses.iter().all(Option::is_some)
    }

    /// Signs the draft with `key` and fills the witness of the key's account.
    ///
    /// The account is the hash of the key's single-signature contract.
    ///
    /// # Errors
    ///
    /// `UnknownSigner` when that account is not a signer of the transaction.
    pub fn add_signature(&self, key: &KeyPair) -> ContractClientResult<Self> {
        let contract = Contract::create_signature_contract(&key.public_key())?;
        let account = contract.script_hash();
        if !self.has_signer(&account) {
            return Err(ContractClientError::UnknownSigner { account });
        }

        let sign_data = self.tx.get_sign_data(self.network)?;
        let signature = key.sign(&sign_data);
        let invocation = Contract::create_signature_invocation_script(&signature)?;

        debug!(%account, "added signature to transaction draft");
        self.add_witness(&account, Witness::new(invocation, contract.script))
    }

    /// Fills the witness slot of `account` with a prepared witness, for
    /// accounts that are not plain single-signature contracts.
    ///
    /// # Errors
    ///
    /// `UnknownSigner` when `account` is not a signer of the transaction.
    pub fn add_witness(&self, account: &UInt160, witness: Witness) -> ContractClientResult<Self> {
        if !self.has_signer(account) {
            return Err(ContractClientError::UnknownSigner { account: *account });
        }

        let mut next = self.clone();
        for (signer, slot) in next.tx.signers().iter().zip(next.witnesses.iter_mut()) {
            if signer.account == *account {
                *slot = Some(witness.clone());
            }
        }
        Ok(next)
    }

    /// Finalizes the transaction with witnesses in signer order.
    ///
    /// # Errors
    ///
    /// `NoSigners` for a transaction without signers, and
    /// `IncompleteSignatures` naming every signer without a witness.
    pub fn sign(&self) -> ContractClientResult<SignedTransaction> {
        if self.tx.signers().is_empty() {
            return Err(ContractClientError::NoSigners);
        }
        let missing = self.missing_signers();
        if !missing.is_empty() {
            return Err(ContractClientError::IncompleteSignatures { missing });
        }

        let mut tx = self.tx.clone();
        tx.set_witnesses(self.witnesses.iter().flatten().cloned().collect());
        Ok(SignedTransaction::new(tx))
    }

    fn has_signer(&self, account: &UInt160) -> bool {
        self.tx
            .signers()
            .iter()
            .any(|signer| signer.account == *account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_core::Signer;
    use neo_primitives::WitnessScope;

    const NETWORK: u32 = 894_710_606;

    fn account_of(key: &KeyPair) -> UInt160 {
        Contract::create_signature_contract(&key.public_key())
            .unwrap()
            .script_hash()
    }

    fn draft_for(keys: &[&KeyPair]) -> TransactionManager {
        let signers = keys
            .iter()
            .map(|key| Signer::new(account_of(key), WitnessScope::CALLED_BY_ENTRY))
            .collect();
        let mut tx = Transaction::new(vec![0x40], signers);
        tx.set_nonce(7);
        tx.set_system_fee(100);
        tx.set_network_fee(1_000);
        tx.set_valid_until_block(5_860);
        TransactionManager::new(tx, NETWORK)
    }

    #[test]
    fn signature_covers_network_and_hash() {
        let key = KeyPair::from_private_key(&[2u8; 32]).unwrap();
        let draft = draft_for(&[&key]);

        let signed = draft.add_signature(&key).unwrap().sign().unwrap();
        let tx = signed.transaction();
        assert_eq!(tx.witnesses().len(), 1);

        let witness = &tx.witnesses()[0];
        assert_eq!(witness.invocation_script.len(), 66);
        assert_eq!(witness.verification_script.len(), 40);
        assert!(Contract::is_signature_contract(&witness.verification_script));

        let sign_data = tx.get_sign_data(NETWORK).unwrap();
        assert_eq!(&sign_data[..4], &NETWORK.to_le_bytes());
        assert!(KeyPair::verify(
            &sign_data,
            &witness.invocation_script[2..],
            &key.public_key()
        )
        .unwrap());
    }

    #[test]
    fn foreign_key_is_unknown_signer() {
        let key = KeyPair::from_private_key(&[3u8; 32]).unwrap();
        let stranger = KeyPair::from_private_key(&[4u8; 32]).unwrap();
        let draft = draft_for(&[&key]);
        let before = draft.clone();

        let err = draft.add_signature(&stranger).unwrap_err();
        match err {
            ContractClientError::UnknownSigner { account } => {
                assert_eq!(account, account_of(&stranger));
            }
            other => panic!("unexpected error {other}"),
        }
        assert_eq!(draft, before);
        assert_eq!(draft.missing_signers(), vec![account_of(&key)]);
    }

    #[test]
    fn sign_names_missing_accounts_in_order() {
        let a = KeyPair::from_private_key(&[5u8; 32]).unwrap();
        let b = KeyPair::from_private_key(&[6u8; 32]).unwrap();
        let c = KeyPair::from_private_key(&[7u8; 32]).unwrap();
        let draft = draft_for(&[&a, &b, &c]);

        let partial = draft.add_signature(&b).unwrap();
        assert!(!partial.is_complete());
        match partial.sign().unwrap_err() {
            ContractClientError::IncompleteSignatures { missing } => {
                assert_eq!(missing, vec![account_of(&a), account_of(&c)]);
            }
            other => panic!("unexpected error {other}"),
        }

        // the earlier draft is untouched
        assert!(draft.witness(&account_of(&b)).is_none());
        assert!(partial.witness(&account_of(&b)).is_some());
    }

    #[test]
    fn signerless_draft_never_signs() {
        let draft = draft_for(&[]);
        assert!(draft.is_complete());
        assert!(draft.missing_signers().is_empty());
        assert!(matches!(draft.sign(), Err(ContractClientError::NoSigners)));
    }

    #[test]
    fn witnesses_follow_signer_order() {
        let a = KeyPair::from_private_key(&[8u8; 32]).unwrap();
        let b = KeyPair::from_private_key(&[9u8; 32]).unwrap();
        let draft = draft_for(&[&a, &b]);

        let signed = draft
            .add_signature(&b)
            .and_then(|d| d.add_signature(&a))
            .and_then(|d| d.sign())
            .unwrap();
        let witnesses = signed.transaction().witnesses();
        assert_eq!(witnesses[0].script_hash(), account_of(&a));
        assert_eq!(witnesses[1].script_hash(), account_of(&b));
    }

    #[test]
    fn prepared_witness_fills_contract_account() {
        let key = KeyPair::from_private_key(&[10u8; 32]).unwrap();
        let contract_account = UInt160::from([0xab; 20]);
        let mut tx = Transaction::new(
            vec![0x40],
            vec![
                Signer::new(account_of(&key), WitnessScope::CALLED_BY_ENTRY),
                Signer::new(contract_account, WitnessScope::CALLED_BY_ENTRY),
            ],
        );
        tx.set_valid_until_block(1);
        let draft = TransactionManager::new(tx, NETWORK);

        let signed = draft
            .add_signature(&key)
            .and_then(|d| d.add_witness(&contract_account, Witness::empty()))
            .and_then(|d| d.sign())
            .unwrap();
        assert_eq!(signed.transaction().witnesses().len(), 2);
        assert!(signed.transaction().witnesses()[1]
            .verification_script
            .is_empty());
    }
}
