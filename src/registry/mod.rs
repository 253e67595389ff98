//! Canonical contract registry.
//!
//! Pairs each known contract with its canonical address and the patterns
//! that recognize it, either named inline in prose or introduced by a
//! markdown section heading.

pub mod loader;
mod pattern;

pub use pattern::NamePattern;

use loader::AddressBook;

/// A contract the synchronizer knows how to recognize and rewrite.
pub struct ContractBinding {
    /// Contract name used in reports.
    pub name: &'static str,
    /// Canonical deployment address, casing verbatim from the manifest.
    /// `None` when the manifest has no entry; such bindings still match
    /// lines but never rewrite them.
    pub address: Option<String>,
    /// Recognizes the contract's name or aliases anywhere in a line.
    pub inline: NamePattern,
    /// Recognizes a level 1-4 heading that opens the contract's section.
    pub section: NamePattern,
}

/// Build the fixed binding table from a loaded address book.
///
/// Order matters and is part of the contract: the first binding to match a
/// line wins, so more specific names (the bridge) sit above the bare asset
/// names they contain.
pub fn bindings(book: &AddressBook) -> Vec<ContractBinding> {
    vec![
        // Core tokens
        ContractBinding {
            name: "JuiceDollar",
            address: book.juice_dollar.clone(),
            inline: NamePattern::new(&[
                (r"\bJuiceDollar\b", None),
                // Bare JUSD, but not the savings-vault spelling "JUSD (Savings..."
                (r"\bJUSD\b", Some(r"^\s*\(Savings")),
            ]),
            section: NamePattern::new(&[(r"^#{1,4}\s*(?:JuiceDollar|JUSD)(?:\s|$)", None)]),
        },
        ContractBinding {
            name: "Equity",
            address: book.equity.clone(),
            inline: NamePattern::new(&[(r"\bEquity\b|\bJUICE\b(?:\s*\(Equity\))?", None)]),
            section: NamePattern::new(&[(r"^#{1,4}\s*(?:Equity|JUICE)\b", None)]),
        },
        ContractBinding {
            name: "SavingsVaultJUSD",
            address: book.savings_vault_jusd.clone(),
            inline: NamePattern::new(&[(r"\bSavingsVaultJUSD\b|\bsvJUSD\b", None)]),
            section: NamePattern::new(&[(r"^#{1,4}\s*(?:SavingsVaultJUSD|svJUSD)", None)]),
        },
        // Gateways
        ContractBinding {
            name: "FrontendGateway",
            address: book.frontend_gateway.clone(),
            inline: NamePattern::new(&[(r"\bFrontendGateway\b", None)]),
            section: NamePattern::new(&[(r"^#{1,4}\s*FrontendGateway", None)]),
        },
        ContractBinding {
            name: "SavingsGateway",
            address: book.savings_gateway.clone(),
            inline: NamePattern::new(&[(r"\bSavingsGateway\b", None)]),
            section: NamePattern::new(&[(r"^#{1,4}\s*SavingsGateway", None)]),
        },
        ContractBinding {
            name: "MintingHubGateway",
            address: book.minting_hub_gateway.clone(),
            // Bare MintingHub cannot match inside MintingHubGateway: there is
            // no word boundary between "Hub" and "Gateway".
            inline: NamePattern::new(&[(r"\bMintingHubGateway\b|\bMintingHub\b", None)]),
            section: NamePattern::new(&[(
                r"^#{1,4}\s*(?:MintingHubGateway|MintingHub)(?:\s|$)",
                None,
            )]),
        },
        // MintingHub components
        ContractBinding {
            name: "PositionFactory",
            address: book.position_factory_v2.clone(),
            inline: NamePattern::new(&[(r"\bPositionFactory\b", None)]),
            section: NamePattern::new(&[(r"^#{1,4}\s*PositionFactory", None)]),
        },
        ContractBinding {
            name: "PositionRoller",
            address: book.roller.clone(),
            inline: NamePattern::new(&[(r"\bPositionRoller\b", None)]),
            section: NamePattern::new(&[(r"^#{1,4}\s*PositionRoller", None)]),
        },
        // Bridge contracts; the bridge precedes the bare asset so that
        // "StartUSD Bridge" is never attributed to StartUSD
        ContractBinding {
            name: "StartUSDBridge",
            address: book.bridge_start_usd.clone(),
            inline: NamePattern::new(&[(r"\bStartUSD\s*Bridge\b|\bStablecoinBridge\b", None)]),
            section: NamePattern::new(&[(
                r"^#{1,4}\s*(?:StartUSD\s*Bridge|StablecoinBridge)",
                None,
            )]),
        },
        ContractBinding {
            name: "StartUSD",
            address: book.start_usd.clone(),
            inline: NamePattern::new(&[(r"\bStartUSD\b", Some(r"^\s*Bridge"))]),
            section: NamePattern::new(&[(r"^#{1,4}\s*StartUSD(?:\s|$)", Some(r"^\s*Bridge"))]),
        },
    ]
}
