/// Full format specification printed by `vitrine spec`.
const SPEC: &str = r#"VITRINE SHOWCASE FORMAT
=======================

A showcase is one YAML file. Image paths are relative to it. Unknown
top-level keys are rejected; every list section may be omitted or left
empty, in which case that section simply does not appear on the page.

brand (required)
----------------
brand:
  name: Archipelago Tours        # window title, header, hero fallback
  tagline: Sail the spice route  # optional, shown when hero is empty
  whatsapp: "6282110821485"      # digits only, international, no '+'
  theme: light                   # optional: light | dark
  footer: © 2026 Archipelago Tours   # optional footer line

nav (optional)
--------------
Links shown inline in the header and in the slide-in drawer. Sections:
home, gallery, packages, videos, contact.

nav:
  - label: Home
    section: home
  - label: Packages
    section: packages

hero (optional)
---------------
Fullscreen carousel slides. Auto-advances every 6 seconds (see
`--interval` and `defaults.interval`); pauses while hovered; arrows,
indicator dots, arrow keys and horizontal swipes navigate.

hero:
  - title: Island Hopper
    caption: Seven days, five islands
    image: media/hero-1.jpg      # optional; missing file -> placeholder

gallery (optional)
------------------
Three-column grid; items fade in as they scroll into view.

gallery:
  - title: Hidden lagoon
    image: media/lagoon.jpg

packages (optional)
-------------------
Cards with a Book Now button that opens the booking dialog.

packages:
  - name: Island Hopper
    price: "$1,290"
    duration: 7 days
    highlights:
      - Private boat
      - All meals included

videos (optional)
-----------------
Simulated players: click toggles play/pause, hovering a paused tile
plays a two-second preview.

videos:
  - title: Sunrise at the caldera
    duration_secs: 42
    thumbnail: media/sunrise.jpg

contact (optional)
------------------
Presence enables the contact section. Submitting a valid form opens a
prefilled WhatsApp chat with the brand number after a short delay.

contact:
  intro: Tell us where you want to go.

KEYS
----
Left/Right  previous / next slide
F           toggle fullscreen
Esc         dismiss alert / dialog / drawer
Q           quit
"#;

/// Quick-reference card printed by `vitrine spec --short`.
const SHORT: &str = r#"VITRINE QUICK REFERENCE
-----------------------
brand:     name, tagline, whatsapp (digits), theme (light|dark), footer
nav:       [{label, section: home|gallery|packages|videos|contact}]
hero:      [{title, caption, image}]          6s carousel, hover pauses
gallery:   [{title, image}]                   reveal-on-scroll grid
packages:  [{name, price, duration, highlights[]}]   Book Now dialog
videos:    [{title, duration_secs, thumbnail}]       2s hover preview
contact:   {intro}                            WhatsApp hand-off form

keys: Left/Right slides, F fullscreen, Esc dismiss, Q quit
"#;

/// Print the showcase format reference.
pub fn run(short: bool) {
    if short {
        print!("{SHORT}");
    } else {
        print!("{SPEC}");
    }
}
