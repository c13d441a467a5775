use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

struct Section {
    heading: &'static str,
    intro: &'static str,
    bullets: &'static [&'static str],
}

const DATA_SECTIONS: &[Section] = &[
    Section {
        heading: "Source",
        intro: "Ideally, we want to work with a dataset that has only",
        bullets: &[
            "positions that never had liquidity partially removed,",
            "positions that never had additional liquidity added,",
            "positions that ran its course and had 100% liquidity removed and no new liquidity added afterwards.",
        ],
    },
    Section {
        heading: "",
        intro: "A dataset of the first two kinds was downloaded from Revert Finance on Nov 20, 2022 at 00:01:13 UTC. Data of the third kind cannot be easily obtained. We then took a subset of data that meet all of the following criteria:",
        bullets: &[
            "initial deposit value is between $1,000 and $1M US Dollars,",
            "age of position is at least 0.5 days (or 12 hours),",
            "lower BTCETH limit is set at least 5,",
            "upper BTCETH limit is set at most 60.",
        ],
    },
    Section {
        heading: "",
        intro: "Ranges of Important Variables on this subset:",
        bullets: &[
            "Age ranges from 0.5 to 564.0 days,",
            "Deposit ranges from 1005.9 to 925109.0 USD,",
            "Price lower limit ranges from 5.0 to 17.0,",
            "Price upper limit ranges from 12.0 to 50.0,",
            "ROI ranges from -25.59% to 34.80%,",
            "Fee APR ranges from 0.05% to 167.84%.",
        ],
    },
    Section {
        heading: "",
        intro: "Finally, we split this subset into a training set (80%, 673 records) and a test set (20%, 169 records). Models were trained with cross-validation (cv) on the training set only and the best one was chosen by cv error. Only after the model was final did we use it on the test set to get the predictions displayed at the top of this page.",
        bullets: &[],
    },
];

const MODEL_SECTIONS: &[Section] = &[
    Section {
        heading: "Targets",
        intro: "",
        bullets: &["ROI", "Fee APR"],
    },
    Section {
        heading: "Features",
        intro: "",
        bullets: &[
            "Fee Tier",
            "Age",
            "Price Lower Limit",
            "Price Upper Limit",
            "Price Range (Price Upper Limit - Price Lower Limit).",
        ],
    },
    Section {
        heading: "Transformations",
        intro: "",
        bullets: &[
            "Applied log1p() to Fee APR, Age, Price Upper Limit and Price Range because they had long right tails.",
            "Standardized Price Lower Limit.",
            "One-Hot Encoded Fee Tier.",
        ],
    },
    Section {
        heading: "Model selection",
        intro: "",
        bullets: &[
            "XGBOOST regressor was trained, where a single parameter, learning rate, was tuned via 5-fold cross-validation with negative mean absolute error as the scoring metric.",
            "The best model for ROI prediction had a CV error of 1.2%.",
            "The best model for Fee APR prediction had a CV error of 3.05%.",
        ],
    },
    Section {
        heading: "Test Set Performance",
        intro: "",
        bullets: &[
            "The best model for ROI prediction had a test error of 1.3%.",
            "The best model for Fee APR prediction had a test error of 3.15%.",
        ],
    },
];

const CODE_LINKS: &[(&str, &str)] = &[
    (
        "Download data",
        "https://github.com/coindataschool/univ3lp/blob/main/scripts/01-pull-data.py",
    ),
    (
        "Prepare data",
        "https://github.com/coindataschool/univ3lp/blob/main/scripts/02-prep-data.py",
    ),
    (
        "Train Models",
        "https://github.com/coindataschool/univ3lp/blob/main/scripts/03-model-roi-n-fee-apr.py",
    ),
];

pub fn render_methodology(ui: &mut egui::Ui) {
    ui.heading("Methodology");
    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.columns(2, |columns| {
        columns[0].label(egui::RichText::new("Data").size(18.0).strong());
        for section in DATA_SECTIONS {
            render_section(&mut columns[0], section);
        }

        columns[1].label(egui::RichText::new("Machine Learning").size(18.0).strong());
        for section in MODEL_SECTIONS {
            render_section(&mut columns[1], section);
        }
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    ui.separator();
    ui.label(egui::RichText::new("Code").size(18.0).strong());
    for (label, url) in CODE_LINKS {
        ui.horizontal(|ui| {
            ui.label("•");
            ui.hyperlink_to(*label, *url);
        });
    }
}

fn render_section(ui: &mut egui::Ui, section: &Section) {
    ui.add_space(DesignSystem::SPACING_SMALL);
    if !section.heading.is_empty() {
        ui.label(egui::RichText::new(section.heading).strong());
    }
    if !section.intro.is_empty() {
        ui.label(egui::RichText::new(section.intro).color(DesignSystem::TEXT_SECONDARY));
    }
    for bullet in section.bullets {
        ui.horizontal_wrapped(|ui| {
            ui.label("•");
            ui.label(egui::RichText::new(*bullet).color(DesignSystem::TEXT_SECONDARY));
        });
    }
}
