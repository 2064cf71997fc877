use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::{
    self,
    extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions},
};
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::constants::AIRDROP_SEED;
use crate::state::SurveyAirdrop;

/// Mint extensions that make the recipient receive something other than the
/// amount debited from the vault, or that need accounts a payout cannot supply.
pub const UNSUPPORTED_MINT_EXTENSIONS: [ExtensionType; 2] = [
    ExtensionType::TransferFeeConfig,
    ExtensionType::TransferHook,
];

/// Owner-signed deposit into a vault, for both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    transfer_checked(CpiContext::new(token_program, cpi_accounts), amount, decimals)
}

/// Moves `amount` out of one of the airdrop's vaults, signed by the airdrop PDA.
/// Used for reward payouts and owner withdrawals alike.
pub fn transfer_from_airdrop<'info>(
    airdrop: &Account<'info, SurveyAirdrop>,
    token_vault: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        airdrop.owner.as_ref(),
        airdrop.reward_token.as_ref(),
        &[airdrop.bump],
    ];
    let signer = &[&seeds[..]];

    let cpi_accounts = TransferChecked {
        from: token_vault.to_account_info(),
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority: airdrop.to_account_info(),
    };

    transfer_checked(
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer),
        amount,
        mint.decimals,
    )
}

pub fn is_supported_reward_extensions(extensions: &[ExtensionType]) -> bool {
    !extensions
        .iter()
        .any(|extension| UNSUPPORTED_MINT_EXTENSIONS.contains(extension))
}

/// Legacy SPL mints have no extensions and are always accepted.
pub fn is_supported_reward_mint(mint: &AccountInfo) -> Result<bool> {
    if *mint.owner != spl_token_2022::ID {
        return Ok(true);
    }

    let data = mint.try_borrow_data()?;
    let state = StateWithExtensions::<spl_token_2022::state::Mint>::unpack(&data)?;
    Ok(is_supported_reward_extensions(&state.get_extension_types()?))
}
