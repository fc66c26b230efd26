//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works out of the box; the
//! defaults double as the site content, and editing the config file is how
//! the portfolio gets customized.

use crate::theme::ThemeId;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default = "default_projects")]
    pub projects: Vec<ProjectConfig>,
    #[serde(default = "default_writings")]
    pub writings: Vec<WritingConfig>,
    #[serde(default = "default_videos")]
    pub videos: Vec<VideoConfig>,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub secret: SecretConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            projects: default_projects(),
            writings: default_writings(),
            videos: default_videos(),
            contact: ContactConfig::default(),
            ui: UiConfig::default(),
            secret: SecretConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub greeting: String,
    pub bio: Vec<String>,
    pub fun_fact: String,
    pub github_url: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Samarth Saxena".into(),
            greeting: "Hey, I'm Samarth!".into(),
            bio: vec![
                "I am a 21 year old Full-Stack dev, Smart Contract dev and DevRel from India."
                    .into(),
                "I am extremely curious and on a pursuit of knowledge. I believe that being"
                    .into(),
                "sincere is much more important than being serious.".into(),
            ],
            fun_fact:
                "Fun fact: I love DOOM. A lot. It is hidden somewhere on this site too, \
                 see if you can find it!"
                    .into(),
            github_url: "https://github.com/awesamarth".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    pub language: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stars: u32,
    pub url: String,
    pub updated: String,
    /// Shown on the home page as well as the projects page.
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WritingConfig {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub brief: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// YouTube video id; the link is derived from it.
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub telegram: String,
    pub x: String,
    pub farcaster: String,
    pub github: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "samarthsaxena1672003@gmail.com".into(),
            telegram: "@awesamarth".into(),
            x: "@awesamarth_".into(),
            farcaster: "@awesamarth".into(),
            github: "@awesamarth".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Master switch for the audio cues.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Theme used when no preference has been persisted yet.
    #[serde(default = "default_theme")]
    pub default_theme: ThemeId,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sound: true,
            default_theme: default_theme(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecretConfig {
    /// The key sequence that toggles the doom theme.
    pub sequence: String,
}

impl Default for SecretConfig {
    fn default() -> Self {
        Self {
            sequence: "idkfa".into(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_theme() -> ThemeId {
    ThemeId::System
}

fn default_projects() -> Vec<ProjectConfig> {
    vec![
        ProjectConfig {
            name: "mega-cli".into(),
            description: "A sick CLI tool for MegaETH users and devs".into(),
            language: "TypeScript".into(),
            topics: vec!["cli".into(), "ethereum".into(), "megaeth".into()],
            stars: 12,
            url: "https://github.com/awesamarth/mega-cli".into(),
            updated: "29 Mar 2025".into(),
            featured: true,
        },
        ProjectConfig {
            name: "gambit".into(),
            description: "Chess on the blockchain".into(),
            language: "TypeScript".into(),
            topics: vec!["chess".into(), "dapp".into()],
            stars: 8,
            url: "https://github.com/awesamarth/gambit".into(),
            updated: "17 Mar 2025".into(),
            featured: true,
        },
        ProjectConfig {
            name: "croc-ai".into(),
            description: "Your friendly neighbourhood browser assistant".into(),
            language: "TypeScript".into(),
            topics: vec!["extension".into(), "gemini-nano".into()],
            stars: 5,
            url: "https://github.com/awesamarth/croc-ai".into(),
            updated: "1 Feb 2025".into(),
            featured: true,
        },
        ProjectConfig {
            name: "blaze-arcade".into(),
            description: "Feel the speed of real-time blockchains through minigames".into(),
            language: "TypeScript".into(),
            topics: vec!["games".into(), "realtime".into()],
            stars: 4,
            url: "https://github.com/awesamarth/blaze-arcade".into(),
            updated: "12 May 2025".into(),
            featured: true,
        },
        ProjectConfig {
            name: "morphide".into(),
            description: "AI powered online IDE built with a special focus on Morph".into(),
            language: "TypeScript".into(),
            topics: vec!["ide".into(), "ai".into()],
            stars: 3,
            url: "https://github.com/awesamarth/morphide".into(),
            updated: "27 Apr 2024".into(),
            featured: false,
        },
    ]
}

fn default_writings() -> Vec<WritingConfig> {
    vec![
        WritingConfig {
            title: "BONUS: Cheatcodes in Foundry".into(),
            subtitle: Some(
                "A guide that covers some of the many cheatcodes available in Foundry".into(),
            ),
            brief: "For testing complex smart contracts, simply examining their outputs may \
                    not be enough. To manipulate the state of the blockchain, as well as test \
                    for specific reverts and events, Foundry is shipped with a set of cheatcodes."
                .into(),
            url: "https://awesamarth.hashnode.dev/bonus-cheatcodes-in-foundry".into(),
        },
        WritingConfig {
            title: "How to test smart contracts using Foundry".into(),
            subtitle: Some("Learn how you can test your smart contracts in Foundry".into()),
            brief: "It is crucial for all smart contract developers to know how to test their \
                    contracts before deploying them on-chain."
                .into(),
            url: "https://awesamarth.hashnode.dev/how-to-test-smart-contracts-using-foundry"
                .into(),
        },
        WritingConfig {
            title: "How to verify smart contracts using Foundry".into(),
            subtitle: Some(
                "Learn how you can verify your contracts using Etherscan's API".into(),
            ),
            brief: "Blockchain technology is built on the fundamental principle of transparency, \
                    where every transaction is visible and verifiable. We extend the same \
                    principle to smart contracts."
                .into(),
            url: "https://awesamarth.hashnode.dev/how-to-verify-smart-contracts-using-foundry"
                .into(),
        },
        WritingConfig {
            title: "Mainnet Forking in Foundry".into(),
            subtitle: Some(
                "Learn how you can fork Ethereum Mainnet and other live networks in Foundry"
                    .into(),
            ),
            brief: "When developing smart contracts, we often need to interact with contracts \
                    that have already been deployed. It would not be a smart decision to deploy \
                    the contract and test it on Mainnet using real ETH."
                .into(),
            url: "https://awesamarth.hashnode.dev/mainnet-forking-in-foundry".into(),
        },
        WritingConfig {
            title: "How to deploy smart contracts using Foundry".into(),
            subtitle: Some(
                "Learn how you can deploy your contracts both on-chain and locally".into(),
            ),
            brief: "You already know how to write and compile smart contracts in Foundry, and \
                    how to use keystores to safely store your private keys. Now it is time to \
                    deploy."
                .into(),
            url: "https://awesamarth.hashnode.dev/how-to-deploy-smart-contracts-using-foundry"
                .into(),
        },
    ]
}

fn default_videos() -> Vec<VideoConfig> {
    vec![
        VideoConfig {
            id: "sHdCdAUCF0o".into(),
            title: "TEN Survival: Russian Roulette style game on TEN Testnet".into(),
            description: "A demo of TEN Survival, a Russian Roulette style game powered by TEN \
                          protocol's secure and private randomness."
                .into(),
        },
        VideoConfig {
            id: "ePOsRN4BsAI".into(),
            title: "How to Build \"Signatureless\" dApp Experiences".into(),
            description: "How to use Privy embedded wallets to enable virtually signatureless \
                          transactions in your dApps."
                .into(),
        },
        VideoConfig {
            id: "BfpEpmIN2xA".into(),
            title: "Realtime Endpoints for Superfast Ethereum L2s".into(),
            description: "Custom realtime RPC methods used by MegaETH, RISE and Abstract.".into(),
        },
        VideoConfig {
            id: "0ktNilzUN40".into(),
            title: "How to Generate your First Proof on Succinct Network".into(),
            description: "A dev tutorial showing how to generate your first proof on Succinct \
                          Network. Zero to Dev: Episode 1."
                .into(),
        },
        VideoConfig {
            id: "uLLzEAp9DL4".into(),
            title: "Mega CLI: The Ultimate CLI Tool for MegaETH".into(),
            description: "A free and open-source CLI tool for MegaETH devs and users with \
                          multiple different commands."
                .into(),
        },
        VideoConfig {
            id: "BFkGr0LqSYc".into(),
            title: "Gambit: Chess on the blockchain".into(),
            description: "Gambit combines authentic chess gameplay with crypto wagering. Four \
                          game modes: Ranked, Unranked, Arena and Private."
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete() {
        let cfg = AppConfig::default();
        assert!(!cfg.projects.is_empty());
        assert!(!cfg.writings.is_empty());
        assert!(!cfg.videos.is_empty());
        assert!(cfg.projects.iter().any(|p| p.featured));
        assert_eq!(cfg.secret.sequence, "idkfa");
        assert!(cfg.ui.sound);
    }

    #[test]
    fn test_empty_toml_parses_to_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.profile.name, "Samarth Saxena");
        assert_eq!(cfg.ui.default_theme, ThemeId::System);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [secret]
            sequence = "iddqd"

            [ui]
            sound = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.secret.sequence, "iddqd");
        assert!(!cfg.ui.sound);
        assert!(!cfg.projects.is_empty());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.projects.len(), cfg.projects.len());
        assert_eq!(back.ui.default_theme, cfg.ui.default_theme);
    }
}
