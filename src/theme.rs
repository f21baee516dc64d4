// Tailwind class tokens shared by every page.
//
// Palette entries are single utility classes; the composed entries below are
// whitespace-separated lists, which `classes!` splits on its own.

pub const PRIMARY_BG: &str = "bg-stone-50";
pub const SECONDARY_BG: &str = "bg-stone-100";
pub const HEADER_BG: &str = "bg-white";
pub const TEXT_DARK: &str = "text-stone-800";
pub const TEXT_NORMAL: &str = "text-stone-700";
pub const TEXT_LIGHT: &str = "text-stone-600";
pub const ACCENT_DARK: &str = "text-indigo-800";
pub const ACCENT_MEDIUM: &str = "text-indigo-700";
pub const ACCENT_LIGHT: &str = "text-indigo-600";
pub const BORDER: &str = "border-stone-200";
pub const SHADOW_LG: &str = "shadow-lg";
pub const HOVER_SCALE: &str = "hover:scale-105";
pub const TRANSITION: &str = "transition-all duration-300 ease-in-out";
pub const FONT_HEADING: &str = "font-poppins";
pub const FONT_BODY: &str = "font-inter";

pub const SECTION_PADDING: &str = "py-20 sm:py-24";
pub const CONTAINER: &str = "container mx-auto px-4 sm:px-6 lg:px-8";
pub const HEADING_MAIN: &str =
    "text-4xl font-extrabold tracking-tight text-stone-800 sm:text-5xl font-poppins";
pub const HEADING_SUB: &str = "mt-4 text-lg text-stone-600";
pub const SECTION_TITLE: &str = "text-3xl font-bold text-indigo-700 mb-6 font-poppins";
pub const CARD_TITLE: &str = "text-xl font-bold text-stone-800 mb-2 font-poppins";
pub const CARD: &str = "bg-white p-6 rounded-2xl shadow-md border-stone-200";

pub const BTN_PRIMARY: &str = "bg-gradient-to-r from-indigo-700 to-indigo-500 text-white font-bold rounded-full shadow-md shadow-indigo-200 hover:scale-105 transition-all duration-300 ease-in-out";
pub const BTN_SECONDARY: &str = "bg-stone-100/50 backdrop-blur-sm border border-indigo-700/50 text-stone-700 font-bold py-3 px-8 rounded-full text-lg hover:bg-stone-100 transition-all duration-300 ease-in-out";
pub const BTN_OUTLINE: &str = "bg-white text-indigo-700 border border-indigo-700 hover:bg-indigo-50 hover:border-indigo-800 hover:text-indigo-800 rounded-full font-bold transition-all duration-300 ease-in-out";

/// Primary button sizes; the base token carries no padding.
pub const BTN_LG: &str = "py-3 px-8 text-lg";
pub const BTN_MD: &str = "py-3 px-6 text-base";
pub const BTN_BLOCK: &str = "py-3 px-4";

pub const INPUT: &str = "mt-1 block w-full border border-stone-200 rounded-md shadow-sm py-2 px-3 focus:ring-indigo-500 focus:border-indigo-500 bg-white text-stone-800";
pub const LINK_ACTION: &str =
    "mt-3 text-indigo-700 hover:text-indigo-600 font-medium transition-all duration-300 ease-in-out";
