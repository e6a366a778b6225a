//! The audit scope: contract source files that questions and validation
//! verdicts may refer to.
//!
//! The list is stored once, in repository order. It is embedded into the
//! question and validation prompts using list-literal notation
//! (`['a', 'b', ...]`), which downstream consumers treat as opaque text.

use std::sync::OnceLock;

/// In-scope contract source files, relative to the AElf repository root.
pub const SCOPE_FILES: &[&str] = &[
    "contract/AElf.Contracts.Association/Association.cs",
    "contract/AElf.Contracts.Association/AssociationConstants.cs",
    "contract/AElf.Contracts.Association/AssociationContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Association/AssociationReferenceState.cs",
    "contract/AElf.Contracts.Association/AssociationState.cs",
    "contract/AElf.Contracts.Association/Association_Extensions.cs",
    "contract/AElf.Contracts.Association/Association_Helper.cs",
    "contract/AElf.Contracts.Association/OrganizationMemberList.cs",
    "contract/AElf.Contracts.Configuration/ConfigurationContract.cs",
    "contract/AElf.Contracts.Configuration/ConfigurationContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Configuration/ConfigurationContract_Helper.cs",
    "contract/AElf.Contracts.Configuration/ConfigurationReferenceState.cs",
    "contract/AElf.Contracts.Configuration/ConfigurationState.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContractConstants.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_ACS11_CrossChainInformationProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_ACS4_ConsensusInformationProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_CacheFileds.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_GetConsensusBlockExtraData.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_GetConsensusCommand.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_GetMaximumBlocksCount.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_HelpMethods.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_LIB.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_MaximumMinersCount.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_NextTerm.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_ProcessConsensusInformation.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_SecretSharing.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_SideChainDividendsPool.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_Validation.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_ValidationService.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AEDPoSContract_ViewMethods.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/AElfConsensusContractState.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusCommandGeneration/ConsensusBehaviourProviderBase.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusCommandGeneration/ConsensusCommandProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusCommandGeneration/MainChainConsensusBehaviourProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusCommandGeneration/MiningTimeArrangingService.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusCommandGeneration/SideChainConsensusBehaviourProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusCommandGeneration/Strategies/CommandStrategyBase.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusCommandGeneration/Strategies/FirstRoundCommandStrategy.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusCommandGeneration/Strategies/ICommandStrategy.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusCommandGeneration/Strategies/NormalBlockCommandStrategy.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusCommandGeneration/Strategies/TerminateRoundCommandStrategy.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusCommandGeneration/Strategies/TinyBlockCommandStrategy.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusHeaderInfoValidationProviders/ConsensusValidationContext.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusHeaderInfoValidationProviders/ContinuousBlocksValidationProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusHeaderInfoValidationProviders/IHeaderInformationValidationProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusHeaderInfoValidationProviders/LibInformationValidationProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusHeaderInfoValidationProviders/MiningPermissionValidationProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusHeaderInfoValidationProviders/NextRoundMiningOrderValidationProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusHeaderInfoValidationProviders/RoundTerminateValidationProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusHeaderInfoValidationProviders/TimeSlotValidationProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ConsensusHeaderInfoValidationProviders/UpdateValueValidationProvider.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/ContractsReferences.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/MinerList.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/NextRoundInput.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/NextTermInput.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/Round.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/Round_ApplyNormalConsensusData.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/Round_ArrangeAbnormalMiningTime.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/Round_ExtractInformationToUpdateConsensus.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/Round_Generation.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/Round_GetLighterRound.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/Round_GetLogs.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/Round_ImpliedIrreversibleBlockHeight.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/Round_Recover.cs",
    "contract/AElf.Contracts.Consensus.AEDPoS/Types/Round_Simplify.cs",
    "contract/AElf.Contracts.CrossChain/CrossChainContract.cs",
    "contract/AElf.Contracts.CrossChain/CrossChainContractState.cs",
    "contract/AElf.Contracts.CrossChain/CrossChainContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.CrossChain/CrossChainContract_Constants.cs",
    "contract/AElf.Contracts.CrossChain/CrossChainContract_Helper.cs",
    "contract/AElf.Contracts.CrossChain/CrossChainContract_View.cs",
    "contract/AElf.Contracts.CrossChain/CrossChainReferenceState.cs",
    "contract/AElf.Contracts.Economic/EconomicContract.cs",
    "contract/AElf.Contracts.Economic/EconomicContractConstants.cs",
    "contract/AElf.Contracts.Economic/EconomicContractState.cs",
    "contract/AElf.Contracts.Economic/EconomicContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Election/ElectionContractConstants.cs",
    "contract/AElf.Contracts.Election/ElectionContractReferenceState.cs",
    "contract/AElf.Contracts.Election/ElectionContractState.cs",
    "contract/AElf.Contracts.Election/ElectionContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Election/ElectionContract_Candidate.cs",
    "contract/AElf.Contracts.Election/ElectionContract_Elector.cs",
    "contract/AElf.Contracts.Election/ElectionContract_Maintainence.cs",
    "contract/AElf.Contracts.Election/TimestampHelper.cs",
    "contract/AElf.Contracts.Election/ViewMethods.cs",
    "contract/AElf.Contracts.Genesis/BasicContractZero.cs",
    "contract/AElf.Contracts.Genesis/BasicContractZeroContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Genesis/BasicContractZeroReferenceState.cs",
    "contract/AElf.Contracts.Genesis/BasicContractZeroState.cs",
    "contract/AElf.Contracts.Genesis/BasicContractZero_Constants.cs",
    "contract/AElf.Contracts.Genesis/BasicContractZero_Helper.cs",
    "contract/AElf.Contracts.MultiToken/TokenContractConstants.cs",
    "contract/AElf.Contracts.MultiToken/TokenContractReferenceState.cs",
    "contract/AElf.Contracts.MultiToken/TokenContractState.cs",
    "contract/AElf.Contracts.MultiToken/TokenContractState_ChargeFee.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_ACS1_MethodFeeProvider.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_ACS2_StatePathsProvider.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_Actions.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_CacheFileds.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_Delegation.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_Fee_Calculate_Coefficient.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_Fees.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_Helper.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_Method_Authorization.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_NFTHelper.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_NFT_Actions.cs",
    "contract/AElf.Contracts.MultiToken/TokenContract_Views.cs",
    "contract/AElf.Contracts.NFT/NFTContractConstants.cs",
    "contract/AElf.Contracts.NFT/NFTContractReferenceState.cs",
    "contract/AElf.Contracts.NFT/NFTContractState.cs",
    "contract/AElf.Contracts.NFT/NFTContract_ACS1.cs",
    "contract/AElf.Contracts.NFT/NFTContract_Create.cs",
    "contract/AElf.Contracts.NFT/NFTContract_Helpers.cs",
    "contract/AElf.Contracts.NFT/NFTContract_UseChain.cs",
    "contract/AElf.Contracts.NFT/NFTContract_View.cs",
    "contract/AElf.Contracts.Parliament/Parliament.cs",
    "contract/AElf.Contracts.Parliament/ParliamentConstants.cs",
    "contract/AElf.Contracts.Parliament/ParliamentContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Parliament/ParliamentState.cs",
    "contract/AElf.Contracts.Parliament/Parliament_Constants.cs",
    "contract/AElf.Contracts.Parliament/Parliament_Helper.cs",
    "contract/AElf.Contracts.Profit/ContractsReferences.cs",
    "contract/AElf.Contracts.Profit/Models/RemovedDetails.cs",
    "contract/AElf.Contracts.Profit/ProfitContract.cs",
    "contract/AElf.Contracts.Profit/ProfitContractConstants.cs",
    "contract/AElf.Contracts.Profit/ProfitContractState.cs",
    "contract/AElf.Contracts.Profit/ProfitContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Profit/ViewMethods.cs",
    "contract/AElf.Contracts.Referendum/ProposerWhiteListExtensions.cs",
    "contract/AElf.Contracts.Referendum/Referendum.cs",
    "contract/AElf.Contracts.Referendum/ReferendumConstants.cs",
    "contract/AElf.Contracts.Referendum/ReferendumContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Referendum/ReferendumState.cs",
    "contract/AElf.Contracts.Referendum/Referendum_Helper.cs",
    "contract/AElf.Contracts.TokenConverter/BancorHelper.cs",
    "contract/AElf.Contracts.TokenConverter/InvalidValueException.cs",
    "contract/AElf.Contracts.TokenConverter/TokenConvert_Views.cs",
    "contract/AElf.Contracts.TokenConverter/TokenConverterContract.cs",
    "contract/AElf.Contracts.TokenConverter/TokenConverterContractState.cs",
    "contract/AElf.Contracts.TokenConverter/TokenConverterContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.TokenHolder/ContractsReferences.cs",
    "contract/AElf.Contracts.TokenHolder/TokenHolderContract.cs",
    "contract/AElf.Contracts.TokenHolder/TokenHolderContractState.cs",
    "contract/AElf.Contracts.TokenHolder/TokenHolderContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Treasury/ContractsReferences.cs",
    "contract/AElf.Contracts.Treasury/TreasuryContract.cs",
    "contract/AElf.Contracts.Treasury/TreasuryContractConstants.cs",
    "contract/AElf.Contracts.Treasury/TreasuryContractState.cs",
    "contract/AElf.Contracts.Treasury/TreasuryContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Vote/ContractsReferences.cs",
    "contract/AElf.Contracts.Vote/ViewMethods.cs",
    "contract/AElf.Contracts.Vote/VoteContract.cs",
    "contract/AElf.Contracts.Vote/VoteContractConstants.cs",
    "contract/AElf.Contracts.Vote/VoteContractState.cs",
    "contract/AElf.Contracts.Vote/VoteContract_ACS1_TransactionFeeProvider.cs",
    "contract/AElf.Contracts.Vote/VoteExtensions.cs",
];

/// Render `files` as a single-line list literal: `['a', 'b']`.
///
/// Single quotes and backslashes inside an entry are escaped so the output
/// stays a well-formed literal.
pub fn render_list_literal<S: AsRef<str>>(files: &[S]) -> String {
    let mut out = String::from("[");
    for (i, file) in files.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('\'');
        for c in file.as_ref().chars() {
            if c == '\'' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('\'');
    }
    out.push(']');
    out
}

/// The rendered form of [`SCOPE_FILES`], built on first use.
pub fn scope_literal() -> &'static str {
    static RENDERED: OnceLock<String> = OnceLock::new();
    RENDERED.get_or_init(|| render_list_literal(SCOPE_FILES))
}

/// Whether `path` names one of the [`SCOPE_FILES`]. A leading `./` is ignored.
pub fn is_in_scope(path: &str) -> bool {
    let path = path.trim();
    let path = path.strip_prefix("./").unwrap_or(path);
    SCOPE_FILES.contains(&path)
}

/// Distinct `contract/<Module>` directories, in first-seen order.
pub fn modules() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for file in SCOPE_FILES {
        let Some(module) = module_of(file) else {
            continue;
        };
        if !seen.contains(&module) {
            seen.push(module);
        }
    }
    seen
}

/// `contract/AElf.Contracts.Vote/VoteContract.cs` -> `contract/AElf.Contracts.Vote`.
fn module_of(file: &str) -> Option<&str> {
    let (root, rest) = file.split_once('/')?;
    let (module, _) = rest.split_once('/')?;
    let len = root.len() + 1 + module.len();
    file.get(..len)
}
