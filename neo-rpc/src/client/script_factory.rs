// Copyright (C) 2015-2025 The Neo Project.
//
// script_factory.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{ContractArgument, ContractClientError, ContractClientResult};
use neo_core::ContractManifest;
use neo_primitives::UInt160;
use neo_vm::{CallFlags, ScriptBuilder, Syscall};
use tracing::debug;

/// Encodes contract calls and deployments as VM scripts.
pub trait ScriptFactory: Send + Sync {
    /// Builds a `System.Contract.Call` of `operation` on `script_hash`.
    fn make_invocation_script(
        &self,
        script_hash: &UInt160,
        operation: &str,
        args: &[ContractArgument],
    ) -> ContractClientResult<Vec<u8>>;

    /// Builds a `System.Contract.Create` of `bytecode` with `manifest`.
    fn make_deployment_script(
        &self,
        bytecode: &[u8],
        manifest: &ContractManifest,
    ) -> ContractClientResult<Vec<u8>>;
}

/// Emits scripts with the N3 dynamic call convention.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardScriptFactory;

impl StandardScriptFactory {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ScriptFactory for StandardScriptFactory {
    /// Layout: `<argN> ... <arg1> PUSH<n> PACK` (or `NEWARRAY0`), `PUSH15`,
    /// the operation name, the script hash, `SYSCALL System.Contract.Call`.
    fn make_invocation_script(
        &self,
        script_hash: &UInt160,
        operation: &str,
        args: &[ContractArgument],
    ) -> ContractClientResult<Vec<u8>> {
        let mut builder = ScriptBuilder::new();
        for arg in args.iter().rev() {
            arg.emit(&mut builder)?;
        }
        builder
            .emit_pack_items(args.len())
            .emit_push_int(i64::from(CallFlags::ALL.bits()))
            .emit_push_string(operation)
            .emit_push(script_hash.as_bytes())
            .emit_interop(Syscall::ContractCall);

        debug!(
            contract = %script_hash,
            operation,
            args = args.len(),
            size = builder.len(),
            "built invocation script"
        );
        Ok(builder.into_bytes())
    }

    /// Layout: the manifest text, the bytecode, `SYSCALL System.Contract.Create`.
    fn make_deployment_script(
        &self,
        bytecode: &[u8],
        manifest: &ContractManifest,
    ) -> ContractClientResult<Vec<u8>> {
        if bytecode.is_empty() {
            return Err(ContractClientError::EmptyBytecode);
        }

        let manifest_text = manifest.to_json_string()?;
        if manifest_text.len() > ContractManifest::MAX_LENGTH {
            return Err(ContractClientError::ManifestTooLarge {
                size: manifest_text.len(),
                limit: ContractManifest::MAX_LENGTH,
            });
        }

        let mut builder = ScriptBuilder::new();
        builder
            .emit_push_string(&manifest_text)
            .emit_push(bytecode)
            .emit_interop(Syscall::ContractCreate);

        debug!(
            contract = %manifest.name,
            bytecode = bytecode.len(),
            manifest = manifest_text.len(),
            "built deployment script"
        );
        Ok(builder.into_bytes())
    }
}
